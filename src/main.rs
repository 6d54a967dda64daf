use crate::flight::Flight;
use crate::query::query::{
    Dataset, connecting_pairs, count_by_airline, find_by_key, routes_between_airports,
    routes_between_cities, routes_in_window,
};
use crate::time::TimeOfDay;
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::Arc;
use tabled::Tabled;
use tabled::settings::Style;

mod airport;
mod error;
mod flight;
mod query;
mod time;

#[derive(Parser)]
struct Args {
    /// Path to the JSON timetable file
    #[arg(short, long, value_name = "FILE", default_value = "data/default.json")]
    scenario: PathBuf,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        _pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let mut candidates = Vec::new();

        for cmd in &self.commands {
            if cmd.starts_with(line) {
                candidates.push(Pair {
                    display: cmd.clone(),
                    replacement: format!("{} ", cmd),
                });
            }
        }

        Ok((0, candidates))
    }
}

fn paginate(content: String) {
    let mut pager = Command::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        // Fallback to 'more' if 'less' isn't available
        .or_else(|_| Command::new("more").stdin(Stdio::piped()).spawn())
        .expect("Failed to spawn pager");

    let mut stdin = pager.stdin.take().expect("Failed to open stdin for pager");

    if let Err(e) = stdin.write_all(content.as_bytes()) {
        // Broken pipe is common if the user quits the pager early
        if e.kind() != std::io::ErrorKind::BrokenPipe {
            eprintln!("Error writing to pager: {}", e);
        }
    }

    // Wait for the user to close the pager before returning to the ">> " prompt
    let _ = pager.wait();
}

fn print_table<T: Tabled>(rows: &[T]) {
    let mut table = tabled::Table::new(rows);
    table.with(Style::rounded());
    table.with(tabled::settings::Alignment::left());
    if rows.len() > 20 {
        paginate(table.to_string());
    } else {
        println!("{}", table);
    }
}

fn print_flights(matches: &[&Flight]) {
    if matches.is_empty() {
        println!("{}", "No matching flights found.".yellow());
    } else {
        print_table(matches);
    }
}

#[derive(Tabled)]
struct ConnectionRow {
    outbound: String,
    via: Arc<str>,
    onward: String,
    layover: String,
}

impl ConnectionRow {
    fn new(f: &Flight, f1: &Flight) -> ConnectionRow {
        ConnectionRow {
            outbound: f.to_string(),
            via: f.destination.name.clone(),
            onward: f1.to_string(),
            layover: format!("{}m", f1.depart_time.minutes_since(f.arrive_time)),
        }
    }
}

#[derive(Tabled)]
struct AirlineCount {
    airline: Arc<str>,
    flights: usize,
}

fn parse_time(s: &str) -> Option<TimeOfDay> {
    match s.parse::<TimeOfDay>() {
        Ok(t) => Some(t),
        Err(e) => {
            println!("{}", e.to_string().red());
            None
        }
    }
}

fn parse_minutes(s: &str) -> Option<u32> {
    match s.parse::<u32>() {
        Ok(m) => Some(m),
        Err(_) => {
            println!("{}", format!("not a minute count: {:?}", s).red());
            None
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let dataset = Dataset::load_from_file(args.scenario.to_str().unwrap())?;
    println!(
        "Timetable online. Loaded {} flights from {}",
        dataset.flights.len(),
        args.scenario.display()
    );

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: vec![
            "ls".to_string(),
            "find".to_string(),
            "routes".to_string(),
            "cities".to_string(),
            "window".to_string(),
            "connect".to_string(),
            "count".to_string(),
            "help".to_string(),
            "exit".to_string(),
        ],
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                rl.add_history_entry(trimmed)?;

                let parts: Vec<&str> = trimmed.split_whitespace().collect();
                match parts[0] {
                    "ls" => {
                        let filtered: Vec<&Flight> = dataset
                            .flights
                            .iter()
                            .filter(|f| match parts.get(1) {
                                Some(code) => *f.airline_code == **code,
                                None => true,
                            })
                            .collect();
                        print_flights(&filtered);
                    }
                    "find" => {
                        if let (Some(code), Some(num)) = (parts.get(1), parts.get(2)) {
                            match find_by_key(&dataset.flights, code, num) {
                                Some(flight) => print_table(&[flight]),
                                None => println!("{}", "No such flight.".yellow()),
                            }
                        } else {
                            println!("Usage: find <airline> <flight_num>");
                        }
                    }
                    "routes" => {
                        if let (Some(a1), Some(a2)) = (parts.get(1), parts.get(2)) {
                            print_flights(&routes_between_airports(&dataset.flights, a1, a2));
                        } else {
                            println!("Usage: routes <origin_airport> <dest_airport>");
                        }
                    }
                    "cities" => {
                        if let (Some(c1), Some(c2)) = (parts.get(1), parts.get(2)) {
                            print_flights(&routes_between_cities(&dataset.flights, c1, c2));
                        } else {
                            println!("Usage: cities <origin_city> <dest_city>");
                        }
                    }
                    "window" => {
                        if let (Some(a1), Some(a2), Some(from), Some(to)) =
                            (parts.get(1), parts.get(2), parts.get(3), parts.get(4))
                        {
                            if let (Some(from), Some(to)) = (parse_time(from), parse_time(to)) {
                                print_flights(&routes_in_window(
                                    &dataset.flights,
                                    a1,
                                    a2,
                                    from,
                                    to,
                                ));
                            }
                        } else {
                            println!("Usage: window <origin> <dest> <h:mm> <h:mm>");
                        }
                    }
                    "connect" => {
                        if parts.len() < 7 {
                            println!(
                                "Usage: connect <origin> <dest> <h:mm> <h:mm> <min_layover> <max_layover>"
                            );
                            continue;
                        }
                        let times = (parse_time(parts[3]), parse_time(parts[4]));
                        let bounds = (parse_minutes(parts[5]), parse_minutes(parts[6]));
                        if let ((Some(from), Some(to)), (Some(min), Some(max))) = (times, bounds) {
                            match connecting_pairs(
                                &dataset.flights,
                                parts[1],
                                parts[2],
                                from,
                                to,
                                min,
                                max,
                            ) {
                                Ok(pairs) if pairs.is_empty() => {
                                    println!("{}", "No connections found.".yellow())
                                }
                                Ok(pairs) => {
                                    let rows: Vec<ConnectionRow> = pairs
                                        .iter()
                                        .map(|(f, f1)| ConnectionRow::new(f, f1))
                                        .collect();
                                    print_table(&rows);
                                }
                                Err(e) => println!("{}", e.to_string().red()),
                            }
                        }
                    }
                    "count" => {
                        let rows: Vec<AirlineCount> = count_by_airline(&dataset.flights)
                            .into_iter()
                            .map(|(airline, flights)| AirlineCount { airline, flights })
                            .collect();
                        if rows.is_empty() {
                            println!("{}", "No flights loaded.".yellow());
                        } else {
                            print_table(&rows);
                        }
                    }
                    "help" | "?" => {
                        println!("\nAvailable Commands:");
                        println!("  ls [airline]                           - List flights, optionally for one airline");
                        println!("  find <airline> <num>                   - Look up one flight by its key");
                        println!("  routes <a1> <a2>                       - Direct flights between two airports");
                        println!("  cities <c1> <c2>                       - Direct flights between two cities");
                        println!("  window <a1> <a2> <h:mm> <h:mm>         - Direct flights departing in a window (may wrap midnight)");
                        println!("  connect <a1> <a2> <h:mm> <h:mm> <m> <m> - Connecting pairs with layover bounds in minutes");
                        println!("  count                                  - Flights per airline");
                        println!("  help / ?                               - Show this help menu");
                        println!("  exit / quit                            - Exit\n");
                    }
                    "exit" | "quit" => break,
                    _ => println!("Unknown command: {}", parts[0]),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}
