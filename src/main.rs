use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ticket_desk::{
    config::Config,
    error::Notice,
    models::{Booking, Ticket},
    AppState,
};

#[derive(Parser)]
#[command(name = "ticket-desk")]
#[command(about = "Manage tickets, book seats and browse bookings")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ticket inventory
    #[command(subcommand)]
    Tickets(TicketCommands),
    /// Book a ticket for a user
    Book {
        /// Ticket to book
        ticket_id: i64,
        #[arg(long)]
        user: String,
    },
    /// Browse bookings
    #[command(subcommand)]
    Bookings(BookingCommands),
}

#[derive(Subcommand)]
enum TicketCommands {
    /// List all tickets
    List,
    /// Show one ticket
    Show { id: i64 },
    /// Add a ticket
    Add {
        #[arg(long)]
        event: String,
        #[arg(long)]
        seat: String,
        #[arg(long)]
        price: f64,
    },
    /// Edit a ticket; omitted fields keep their current value
    Edit {
        id: i64,
        #[arg(long)]
        event: Option<String>,
        #[arg(long)]
        seat: Option<String>,
        #[arg(long)]
        price: Option<f64>,
    },
    /// Delete a ticket
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum BookingCommands {
    /// List bookings, optionally filtered by a user substring
    List {
        #[arg(long)]
        user: Option<String>,
    },
    /// Show one booking
    Show { id: i64 },
    /// Bookings of exactly this user, as the server looks them up
    User { user: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let state = AppState::new(config)?;
    info!(
        "ticket-desk ({}) using tickets={} bookings={}",
        state.config.app.environment,
        state.tickets.base_url(),
        state.bookings.base_url()
    );

    match cli.command {
        Commands::Tickets(cmd) => run_tickets(&state, cmd).await,
        Commands::Book { ticket_id, user } => run_book(&state, ticket_id, user).await,
        Commands::Bookings(cmd) => run_bookings(&state, cmd).await,
    }

    Ok(())
}

async fn run_tickets(state: &AppState, cmd: TicketCommands) {
    let mut view = state.tickets_view();

    match cmd {
        TicketCommands::List => {
            view.load().await;
            print_tickets(view.tickets());
        }
        TicketCommands::Show { id } => match state.tickets.get_ticket(id).await {
            Ok(ticket) => print_tickets(std::slice::from_ref(&ticket)),
            Err(e) => {
                error!("Error fetching ticket {}: {}", id, e);
                print_notices(&[Notice::error("Failed to load ticket. Please try again.")]);
            }
        },
        TicketCommands::Add { event, seat, price } => {
            *view.new_ticket_mut() = Ticket::draft(event, seat, price);
            view.add().await;
            print_tickets(view.tickets());
        }
        TicketCommands::Edit { id, event, seat, price } => {
            view.load().await;
            let load_notices = view.take_notices();
            if !load_notices.is_empty() {
                print_notices(&load_notices);
                return;
            }
            if !view.start_editing(id) {
                print_notices(&[Notice::error(format!("Ticket {id} not found."))]);
                return;
            }
            if let Some(draft) = view.draft_mut() {
                if let Some(event) = event {
                    draft.event = event;
                }
                if let Some(seat) = seat {
                    draft.seat = seat;
                }
                if let Some(price) = price {
                    draft.price = price;
                }
            }
            view.save().await;
            print_tickets(view.tickets());
        }
        TicketCommands::Delete { id } => {
            view.delete(id).await;
            print_tickets(view.tickets());
        }
    }

    print_notices(&view.take_notices());
}

async fn run_book(state: &AppState, ticket_id: i64, user: String) {
    let mut view = state.book_view();
    view.load_tickets().await;

    let load_notices = view.take_notices();
    if !load_notices.is_empty() {
        print_notices(&load_notices);
        return;
    }
    if !view.select_by_id(ticket_id) {
        print_notices(&[Notice::error(format!("Ticket {ticket_id} not found."))]);
        return;
    }

    view.set_user(user);
    if let Some(booking) = view.confirm().await {
        print_bookings(std::slice::from_ref(&booking));
    }

    print_notices(&view.take_notices());
}

async fn run_bookings(state: &AppState, cmd: BookingCommands) {
    match cmd {
        BookingCommands::List { user } => {
            let mut view = state.bookings_view();
            view.load().await;
            if let Some(user) = user {
                view.set_filter_user(user);
                view.filter();
            }
            print_bookings(view.visible());
            print_notices(&view.take_notices());
        }
        BookingCommands::Show { id } => match state.bookings.get_booking_by_id(id).await {
            Ok(booking) => print_bookings(std::slice::from_ref(&booking)),
            Err(e) => {
                error!("Error fetching booking {}: {}", id, e);
                print_notices(&[Notice::error("Failed to load booking. Please try again.")]);
            }
        },
        BookingCommands::User { user } => match state.bookings.get_bookings_by_user(&user).await {
            Ok(bookings) => print_bookings(&bookings),
            Err(e) => {
                error!("Error fetching bookings of {}: {}", user, e);
                print_notices(&[Notice::error(ticket_desk::views::bookings::LOAD_FAILED)]);
            }
        },
    }
}

fn print_tickets(tickets: &[Ticket]) {
    println!("{:>6}  {:<30} {:<10} {:>10}", "ID", "EVENT", "SEAT", "PRICE");
    for t in tickets {
        println!("{:>6}  {:<30} {:<10} {:>10.2}", t.id, t.event, t.seat, t.price);
    }
}

fn print_bookings(bookings: &[Booking]) {
    println!(
        "{:>6}  {:<20} {:<30} {:<10} {:>10}  {}",
        "ID", "USER", "EVENT", "SEAT", "PRICE", "BOOKED AT"
    );
    for b in bookings {
        println!(
            "{:>6}  {:<20} {:<30} {:<10} {:>10.2}  {}",
            b.id, b.user, b.ticket.event, b.ticket.seat, b.ticket.price, b.booking_date
        );
    }
}

fn print_notices(notices: &[Notice]) {
    for notice in notices {
        if notice.is_error() {
            eprintln!("{notice}");
        } else {
            println!("{notice}");
        }
    }
}
