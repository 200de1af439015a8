use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use kroner::{GoalForm, NewGoal, create_goal, initialize};

/// A utility for creating a demo database for the Kroner dashboard.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

const ACCOUNTS: [(i64, &str); 3] = [(1, "Budgetkonto"), (2, "Opsparing"), (3, "Fælleskonto")];

const TRANSACTIONS: [(&str, &str, Option<&str>, &str, i64); 14] = [
    ("2025-01-02", "-412.75", Some("Dagligvarer"), "Netto", 1),
    ("2025-01-04", "-89.00", Some("Transport"), "DSB", 1),
    ("2025-01-09", "-1249.95", Some("Dagligvarer"), "Føtex", 1),
    ("2025-01-12", "-199.00", Some("Abonnementer"), "Netflix", 1),
    ("2025-01-15", "-58.50", None, "Kiosk", 1),
    ("2025-01-20", "-320.00", Some("Transport"), "Rejsekort", 1),
    ("2025-01-31", "28500.00", Some("Løn"), "Arbejdsgiver", 1),
    ("2025-01-05", "2000.00", Some("Overførsel"), "Budgetkonto", 2),
    ("2025-02-05", "2000.00", Some("Overførsel"), "Budgetkonto", 2),
    ("2025-01-16", "3.21", Some("Renter"), "Banken", 2),
    ("2025-01-03", "-8950.00", Some("Bolig"), "Boligselskab", 3),
    ("2025-01-07", "-645.00", Some("Forsyning"), "Ørsted", 3),
    ("2025-01-18", "-1399.00", Some("Møbler"), "IKEA", 3),
    ("2025-01-25", "-287.25", Some("Dagligvarer"), "Rema 1000", 3),
];

const TOP_MERCHANTS: [(&str, i64); 6] = [
    ("Netto", 42),
    ("DSB", 31),
    ("Føtex", 18),
    ("Rejsekort", 12),
    ("Rema 1000", 9),
    ("IKEA", 2),
];

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

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize(&conn)?;

    println!("Creating accounts...");
    for (id, name) in ACCOUNTS {
        conn.execute(
            "INSERT INTO \"Accounts\" (\"Account_ID\", \"Account_Name\") VALUES (?1, ?2)",
            (id, name),
        )?;
    }

    println!("Creating transactions...");
    for (date, amount, category, vendor, account_id) in TRANSACTIONS {
        conn.execute(
            "INSERT INTO \"Transactions\"
            (\"Date\", \"Amount (DKK)\", \"Category\", \"Vendor\", \"Account_ID\")
            VALUES (?1, CAST(?2 AS REAL), ?3, ?4, ?5)",
            (date, amount, category, vendor, account_id),
        )?;
    }

    println!("Creating top merchants...");
    for (name, purchase_count) in TOP_MERCHANTS {
        conn.execute(
            "INSERT INTO \"Top Merchants\" (\"Merchant_Name\", \"Purchase_Count\") VALUES (?1, ?2)",
            (name, purchase_count),
        )?;
    }

    println!("Creating goals...");
    let goals = [
        ("Sommerferie", "2", "15000.00", "4000.00", "2027-06-30"),
        ("Ny cykel", "2", "8000", "1250.50", "2027-09-01"),
        ("Sofa", "3", "12000", "0", "2027-12-24"),
    ];
    for (name, account_id, target_amount, current_amount, deadline) in goals {
        let goal = NewGoal::try_from(GoalForm {
            name: name.to_owned(),
            account_id: account_id.to_owned(),
            target_amount: target_amount.to_owned(),
            current_amount: current_amount.to_owned(),
            deadline: deadline.to_owned(),
        })?;

        create_goal(&goal, &conn)?;
    }

    println!("Success!");

    Ok(())
}
