use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::{Duration, OffsetDateTime, Time};

use finance_tracker::{NewRecord, UserId, create_record, initialize_db};

/// A utility for creating a test database for the finance tracker server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,

    /// The ID of the user that owns the sample records.
    #[arg(long, short, default_value = "test_user")]
    user_id: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    let user_id = UserId::new(&args.user_id)?;

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating sample records for user {user_id}...");

    let today = OffsetDateTime::now_utc().replace_time(Time::MIDNIGHT);
    let sample_records = [
        (5000.0, "Salary", 27, "Monthly pay"),
        (-1800.0, "Rent", 25, "Rent for the flat"),
        (-142.37, "Food", 20, "Weekly groceries"),
        (-96.5, "Utilities", 14, "Power bill"),
        (-35.0, "Entertainment", 9, "Movie night"),
        (-12.9, "Food", 3, "Coffee and a muffin"),
        (120.0, "Other", 1, "Sold an old bike"),
    ];

    for (amount, category, days_ago, description) in sample_records {
        create_record(
            NewRecord {
                user_id: user_id.clone(),
                amount,
                category: category.to_owned(),
                date: today - Duration::days(days_ago),
                description: description.to_owned(),
            },
            &conn,
        )?;
    }

    println!("Success!");

    Ok(())
}
