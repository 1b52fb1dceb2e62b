//! Command-line front end: renders store state and dispatches intents.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use crate::app::Pizzeria;
use crate::catalog::{
    quote, CatalogMutation, CategoryFilter, MenuItemId, PizzaSize, PriceBracket, RELATED_LIMIT,
};
use crate::config::Config;
use crate::favorites::FavoritesMutation;
use crate::identity::{LoginForm, RegistrationForm, SessionUser};
use crate::nav::{guard, Route};
use crate::reservations::{
    user_bookings, BookingForm, BookingId, EventType, SortKey, TableId,
};

#[derive(Debug, Parser)]
#[command(name = "pizzeria")]
#[command(author, version, about = "Pizzeria storefront: menu, accounts and table booking")]
pub struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the stored users, session and bookings
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the menu, optionally filtered
    Menu {
        #[arg(short, long)]
        category: Option<String>,

        /// all, budget, medium or premium
        #[arg(short, long, default_value = "all")]
        price: PriceBracket,

        #[arg(short, long)]
        search: Option<String>,

        /// Required ingredient; repeat for several
        #[arg(short, long = "ingredient")]
        ingredients: Vec<String>,
    },
    /// Show one pizza with size prices and related items
    Show {
        id: MenuItemId,

        #[arg(long, default_value = "medium")]
        size: PizzaSize,

        /// 1 to 99
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=99))]
        quantity: u32,
    },
    /// Edit and list favorite pizzas for this run
    Favorites {
        /// Menu id to add; repeat for several
        #[arg(short, long)]
        add: Vec<MenuItemId>,

        /// Menu id to remove; repeat for several
        #[arg(short, long)]
        remove: Vec<MenuItemId>,

        /// Empty the list before adding
        #[arg(long)]
        clear: bool,
    },
    /// Create an account and sign in
    Register {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
        #[arg(long)]
        confirm: String,
    },
    /// Sign in
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },
    /// Sign out
    Logout,
    /// Show the signed-in user
    Whoami,
    /// List tables and their availability
    Tables {
        /// Only tables that can seat this many guests
        #[arg(short, long)]
        guests: Option<u32>,
    },
    /// Book a table
    Book {
        #[arg(short, long)]
        table: TableId,
        /// YYYY-MM-DD
        #[arg(short, long)]
        date: String,
        /// HH:MM
        #[arg(long)]
        time: String,
        #[arg(short, long)]
        guests: u32,
        #[arg(long)]
        phone: String,
        /// Contact name (defaults to the account name)
        #[arg(long)]
        name: Option<String>,
        /// Contact email (defaults to the account email)
        #[arg(long)]
        email: Option<String>,
        #[arg(long, default_value = "regular_visit")]
        event: EventType,
        #[arg(long, default_value = "")]
        comment: String,
    },
    /// List your bookings
    Bookings {
        #[arg(short, long)]
        search: Option<String>,
        /// date, guests or name
        #[arg(long, default_value = "date")]
        sort: SortKey,
    },
    /// Cancel one of your bookings
    Cancel { id: BookingId },
    /// Delete one of your bookings
    Remove { id: BookingId },
}

impl Cli {
    /// Resolve the configuration, applying command-line overrides.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if let Some(dir) = &self.data_dir {
            config.storage.data_dir = Some(dir.clone());
        }
        Ok(config)
    }
}

pub async fn run(cli: Cli) -> Result<()> {
    let config = cli.load_config()?;
    let app = Pizzeria::open(config).context("Failed to start storefront")?;

    match cli.command {
        Command::Menu {
            category,
            price,
            search,
            ingredients,
        } => {
            app.load_menu().await?;
            menu(&app, category, price, search, ingredients)
        }
        Command::Show { id, size, quantity } => {
            app.load_menu().await?;
            show(&app, id, size, quantity)
        }
        Command::Favorites { add, remove, clear } => {
            require_session(&app, Route::Favorites)?;
            app.load_menu().await?;
            favorites(&app, clear, add, remove)
        }
        Command::Register {
            name,
            email,
            password,
            confirm,
        } => {
            let form = RegistrationForm {
                name,
                email,
                password,
                confirm_password: confirm,
            };
            register(&app, form).await
        }
        Command::Login { email, password } => login(&app, LoginForm { email, password }).await,
        Command::Logout => {
            app.identity().logout();
            println!("Signed out");
            Ok(())
        }
        Command::Whoami => {
            match app.store().select(|s| s.identity.current_user().cloned()) {
                Some(user) => println!("{} <{}>", user.name, user.email),
                None => println!("Not signed in"),
            }
            Ok(())
        }
        Command::Tables { guests } => tables(&app, guests).await,
        Command::Book {
            table,
            date,
            time,
            guests,
            phone,
            name,
            email,
            event,
            comment,
        } => {
            let user = require_session(&app, Route::Booking)?;
            let form = BookingForm {
                table_id: Some(table),
                date,
                time,
                guests,
                name: name.unwrap_or_else(|| user.name.clone()),
                phone,
                email: email.unwrap_or_else(|| user.email.clone()),
                event_type: event,
                comment,
            };
            book(&app, &user, form).await
        }
        Command::Bookings { search, sort } => {
            let user = require_session(&app, Route::BookingHistory)?;
            app.reservations().set_history_search(search.unwrap_or_default());
            app.reservations().set_history_sort(sort);
            bookings(&app, &user);
            Ok(())
        }
        Command::Cancel { id } => {
            let user = require_session(&app, Route::BookingHistory)?;
            ensure_owned(&app, &user, id)?;
            app.reservations().cancel_booking(id).await?;
            settle_reservation(&app)?;
            println!("Booking {} cancelled", id);
            Ok(())
        }
        Command::Remove { id } => {
            let user = require_session(&app, Route::BookingHistory)?;
            ensure_owned(&app, &user, id)?;
            app.reservations().remove_booking(id).await?;
            settle_reservation(&app)?;
            println!("Booking {} removed", id);
            Ok(())
        }
    }
}

fn require_session(app: &Pizzeria, route: Route) -> Result<SessionUser> {
    let session = app.store().select(|s| s.identity.session.clone());
    if guard(route, &session) == Route::Login {
        bail!("Sign in first (pizzeria login)");
    }
    session
        .user()
        .cloned()
        .context("Session lost while resolving route")
}

fn menu(
    app: &Pizzeria,
    category: Option<String>,
    price: PriceBracket,
    search: Option<String>,
    ingredients: Vec<String>,
) -> Result<()> {
    let store = app.store();
    if let Some(category) = category {
        store.dispatch(CatalogMutation::SetCategory(CategoryFilter::from(category.as_str())));
    }
    store.dispatch(CatalogMutation::SetPriceBracket(price));
    if let Some(search) = search {
        store.dispatch(CatalogMutation::SetSearch(search));
    }
    for ingredient in ingredients {
        store.dispatch(CatalogMutation::ToggleIngredient(ingredient));
    }

    let catalog = store.state().catalog;
    let items = catalog.filtered();
    let active = catalog.filters.active_count();
    if active > 0 {
        println!("{} filter(s) active, {} of {} pizzas", active, items.len(), catalog.items.len());
    }
    if catalog.filters.price != PriceBracket::All {
        println!("Price: {}", catalog.filters.price.label());
    }
    if items.is_empty() {
        println!("Nothing matches these filters");
    }
    for item in items {
        println!("{:>3}  {:<18} {:>4} RUB  [{}]", item.id, item.name, item.price, item.category);
    }
    Ok(())
}

fn show(app: &Pizzeria, id: MenuItemId, size: PizzaSize, quantity: u32) -> Result<()> {
    app.store().dispatch(CatalogMutation::Select(Some(id)));
    let catalog = app.store().state().catalog;
    let Some(item) = catalog.selected_item() else {
        bail!("No pizza with id {}", id);
    };

    println!("{} [{}]", item.name, item.category);
    println!("{}", item.description);
    println!("Ingredients: {}", item.ingredients.join(", "));
    for option in PizzaSize::ALL {
        println!("  {:<16} {:>4} RUB", option.to_string(), option.price(item.price));
    }
    println!("{} x {}: {} RUB", quantity, size, quote(item, size, quantity));

    let related = catalog.related(id, RELATED_LIMIT);
    if !related.is_empty() {
        let names: Vec<&str> = related.iter().map(|r| r.name.as_str()).collect();
        println!("You may also like: {}", names.join(", "));
    }
    Ok(())
}

fn favorites(
    app: &Pizzeria,
    clear: bool,
    add: Vec<MenuItemId>,
    remove: Vec<MenuItemId>,
) -> Result<()> {
    let store = app.store();
    if clear {
        store.dispatch(FavoritesMutation::Clear);
    }
    for id in add {
        let Some(item) = store.select(|s| s.catalog.find(id).cloned()) else {
            bail!("No pizza with id {}", id);
        };
        store.dispatch(FavoritesMutation::Add(item));
    }
    for id in remove {
        store.dispatch(FavoritesMutation::Remove(id));
    }

    let favorites = store.state().favorites;
    if favorites.is_empty() {
        println!("No favorites yet");
    }
    for item in &favorites.items {
        println!("{:>3}  {:<18} {:>4} RUB", item.id, item.name, item.price);
    }
    Ok(())
}

async fn register(app: &Pizzeria, form: RegistrationForm) -> Result<()> {
    let request = form.validate()?;
    app.identity().register(request).await?;
    let identity = app.store().state().identity;
    if let Some(error) = &identity.error {
        bail!(error.clone());
    }
    if let Some(user) = identity.current_user() {
        println!("Welcome, {}! You are signed in.", user.name);
    }
    Ok(())
}

async fn login(app: &Pizzeria, form: LoginForm) -> Result<()> {
    let request = form.validate()?;
    app.identity().login(request).await?;
    let identity = app.store().state().identity;
    if let Some(error) = &identity.error {
        bail!(error.clone());
    }
    if let Some(user) = identity.current_user() {
        println!("Signed in as {}", user.name);
    }
    Ok(())
}

async fn tables(app: &Pizzeria, guests: Option<u32>) -> Result<()> {
    app.reservations().fetch_tables().await?;
    let reservations = app.store().state().reservations;
    if let Some(error) = &reservations.error {
        bail!(error.clone());
    }
    let listed = match guests {
        Some(guests) => reservations.selectable_tables(guests),
        None => reservations.tables.iter().collect(),
    };
    for table in listed {
        let status = if table.available { "free" } else { "booked" };
        println!(
            "{:>3}  {:<10} seats {:>2}  {:<14} {}",
            table.id,
            table.display_name(),
            table.capacity,
            table.location,
            status
        );
    }
    Ok(())
}

async fn book(app: &Pizzeria, user: &SessionUser, form: BookingForm) -> Result<()> {
    app.reservations().fetch_tables().await?;
    let tables = app.store().select(|s| s.reservations.tables.clone());
    let today = chrono::Local::now().date_naive();
    let max_guests = app.config().booking.max_guests;

    let request = form
        .validate(user, &tables, today, max_guests)
        .map_err(|errors| anyhow::anyhow!("{}", errors))?;
    app.reservations().create_booking(request).await?;

    let reservations = app.store().state().reservations;
    if !reservations.booking_success {
        bail!(reservations
            .error
            .unwrap_or_else(|| "Booking was not confirmed".to_string()));
    }
    app.reservations().clear_booking_success();
    if let Some(booking) = reservations.bookings.last() {
        println!(
            "Booked {} on {} at {} for {} guest(s), booking id {}",
            booking.table_name,
            booking.date,
            booking.time.format("%H:%M"),
            booking.guests,
            booking.id
        );
    }
    Ok(())
}

fn bookings(app: &Pizzeria, user: &SessionUser) {
    let reservations = app.store().state().reservations;
    let listed = user_bookings(&reservations.bookings, user.id, &reservations.history);
    if listed.is_empty() {
        println!("No bookings");
    }
    for booking in listed {
        println!(
            "{}  {} {}  {:<10} {:>2} guest(s)  {:<18} {:<9} {}",
            booking.id,
            booking.date,
            booking.time.format("%H:%M"),
            booking.table_name,
            booking.guests,
            booking.event_type,
            booking.status,
            booking.name
        );
    }
}

fn ensure_owned(app: &Pizzeria, user: &SessionUser, id: BookingId) -> Result<()> {
    let owned = app
        .store()
        .select(|s| s.reservations.booking(id).is_some_and(|b| b.user_id == user.id));
    if !owned {
        bail!("You have no booking with id {}", id);
    }
    Ok(())
}

fn settle_reservation(app: &Pizzeria) -> Result<()> {
    if let Some(error) = app.store().select(|s| s.reservations.error.clone()) {
        bail!(error);
    }
    Ok(())
}
