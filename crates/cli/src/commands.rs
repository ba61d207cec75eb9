//! Subcommand handlers
//!
//! Each handler validates its arguments at the boundary, calls exactly one
//! library operation, and prints a styled confirmation or table.

use anyhow::{anyhow, Context, Result};
use biblio_circulation::CirculationManager;
use biblio_config::ConfigManager;
use biblio_core::{Author, Book, Category, Fine, FineStatus, Loan, LoanStatus, Member};
use biblio_store::repos::{authors, books, categories, members};
use biblio_store::Store;
use clap::ArgMatches;
use console::style;

use crate::input;

fn check<T>(result: std::result::Result<T, String>) -> Result<T> {
    result.map_err(anyhow::Error::msg)
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a String> {
    matches
        .get_one::<String>(name)
        .ok_or_else(|| anyhow!("Missing required argument '{}'", name))
}

fn id_arg(matches: &ArgMatches, name: &str) -> Result<u64> {
    check(input::validate_id(required(matches, name)?))
}

fn date_arg(matches: &ArgMatches) -> Result<Option<biblio_core::Date>> {
    matches
        .get_one::<String>("date")
        .map(|s| check(input::validate_date(s)))
        .transpose()
}

pub(crate) fn ok_mark() -> console::StyledObject<&'static str> {
    style("✓").green().bold()
}

pub(crate) fn print_header(title: &str) {
    println!("\n{}", style(title).bold().cyan());
    println!("{}", "=".repeat(80));
}

// Authors

pub fn add_author(store: &Store, matches: &ArgMatches) -> Result<()> {
    let new = authors::NewAuthor {
        first_name: check(input::validate_text("First name", required(matches, "first-name")?))?,
        last_name: check(input::validate_text("Last name", required(matches, "last-name")?))?,
        nationality: check(input::validate_text(
            "Nationality",
            required(matches, "nationality")?,
        ))?,
    };

    let author = authors::create_author(store, new).context("Failed to create author")?;
    println!(
        "{} Author #{} registered: {}",
        ok_mark(),
        author.id,
        author.full_name()
    );
    Ok(())
}

pub fn list_authors(store: &Store) -> Result<()> {
    let all = authors::list_authors(store);
    if all.is_empty() {
        println!("No authors registered. Use 'authors add' to create one.");
        return Ok(());
    }

    print_header("Authors");
    println!("{:<6} {:<40} {:<20}", "ID", "Name", "Nationality");
    for author in &all {
        println!(
            "{:<6} {:<40} {:<20}",
            author.id.to_string(),
            author.full_name(),
            author.nationality
        );
    }
    println!("\nTotal: {} author(s)", all.len());
    Ok(())
}

pub fn show_author(store: &Store, matches: &ArgMatches) -> Result<()> {
    let id = id_arg(matches, "id")?;
    let author = authors::get_author(store, id.into())
        .ok_or_else(|| anyhow!("Author {} not found", id))?;
    print_author(&author);
    Ok(())
}

pub fn update_author(store: &Store, matches: &ArgMatches) -> Result<()> {
    let id = id_arg(matches, "id")?;
    let update = authors::AuthorUpdate {
        first_name: matches
            .get_one::<String>("first-name")
            .map(|s| check(input::validate_text("First name", s)))
            .transpose()?,
        last_name: matches
            .get_one::<String>("last-name")
            .map(|s| check(input::validate_text("Last name", s)))
            .transpose()?,
        nationality: matches
            .get_one::<String>("nationality")
            .map(|s| check(input::validate_text("Nationality", s)))
            .transpose()?,
    };

    let updated = authors::update_author(store, id.into(), update)
        .context("Failed to update author")?;
    if !updated {
        return Err(anyhow!("Author {} not found", id));
    }
    println!("{} Author #{} updated", ok_mark(), id);
    Ok(())
}

pub fn remove_author(store: &Store, matches: &ArgMatches) -> Result<()> {
    let id = id_arg(matches, "id")?;
    let removed =
        authors::remove_author(store, id.into()).context("Failed to remove author")?;
    if !removed {
        return Err(anyhow!("Author {} not found", id));
    }
    println!("{} Author #{} removed", ok_mark(), id);
    Ok(())
}

pub(crate) fn print_author(author: &Author) {
    print_header("Author");
    println!("ID: {}", author.id);
    println!("Name: {}", style(author.full_name()).bold());
    println!("Nationality: {}", author.nationality);
}

// Categories

pub fn add_category(store: &Store, matches: &ArgMatches) -> Result<()> {
    let new = categories::NewCategory {
        name: check(input::validate_text("Name", required(matches, "name")?))?,
        description: check(input::validate_text(
            "Description",
            required(matches, "description")?,
        ))?,
    };

    let category =
        categories::create_category(store, new).context("Failed to create category")?;
    println!(
        "{} Category #{} registered: {}",
        ok_mark(),
        category.id,
        category.name
    );
    Ok(())
}

pub fn list_categories(store: &Store) -> Result<()> {
    let all = categories::list_categories(store);
    if all.is_empty() {
        println!("No categories registered. Use 'categories add' to create one.");
        return Ok(());
    }

    print_header("Categories");
    println!("{:<6} {:<25} {:<45}", "ID", "Name", "Description");
    for category in &all {
        println!(
            "{:<6} {:<25} {:<45}",
            category.id.to_string(),
            category.name,
            category.description
        );
    }
    println!("\nTotal: {} categorie(s)", all.len());
    Ok(())
}

pub fn show_category(store: &Store, matches: &ArgMatches) -> Result<()> {
    let id = id_arg(matches, "id")?;
    let category = categories::get_category(store, id.into())
        .ok_or_else(|| anyhow!("Category {} not found", id))?;
    print_category(&category);
    Ok(())
}

pub fn update_category(store: &Store, matches: &ArgMatches) -> Result<()> {
    let id = id_arg(matches, "id")?;
    let update = categories::CategoryUpdate {
        name: matches
            .get_one::<String>("name")
            .map(|s| check(input::validate_text("Name", s)))
            .transpose()?,
        description: matches
            .get_one::<String>("description")
            .map(|s| check(input::validate_text("Description", s)))
            .transpose()?,
    };

    let updated = categories::update_category(store, id.into(), update)
        .context("Failed to update category")?;
    if !updated {
        return Err(anyhow!("Category {} not found", id));
    }
    println!("{} Category #{} updated", ok_mark(), id);
    Ok(())
}

pub fn remove_category(store: &Store, matches: &ArgMatches) -> Result<()> {
    let id = id_arg(matches, "id")?;
    let removed = categories::remove_category(store, id.into())
        .context("Failed to remove category")?;
    if !removed {
        return Err(anyhow!("Category {} not found", id));
    }
    println!("{} Category #{} removed", ok_mark(), id);
    Ok(())
}

pub(crate) fn print_category(category: &Category) {
    print_header("Category");
    println!("ID: {}", category.id);
    println!("Name: {}", style(&category.name).bold());
    println!("Description: {}", category.description);
}

// Books

pub fn add_book(store: &Store, matches: &ArgMatches) -> Result<()> {
    let new = books::NewBook {
        title: check(input::validate_text("Title", required(matches, "title")?))?,
        isbn: check(input::validate_isbn(required(matches, "isbn")?))?,
        author_id: id_arg(matches, "author")?.into(),
        category_id: id_arg(matches, "category")?.into(),
        publication_year: check(input::validate_year(required(matches, "year")?))?,
        total_copies: check(input::validate_copies(required(matches, "copies")?))?,
    };

    let book = books::create_book(store, new).context("Failed to create book")?;
    println!("{} Book #{} registered: {}", ok_mark(), book.id, book.title);
    println!("  ISBN: {}", book.isbn);
    println!("  Copies: {}", book.total_copies);
    Ok(())
}

pub fn list_books(store: &Store) -> Result<()> {
    let all = books::list_books(store);
    if all.is_empty() {
        println!("No books registered. Use 'books add' to create one.");
        return Ok(());
    }

    print_header("Books");
    println!(
        "{:<6} {:<40} {:<15} {:<12} {:<8}",
        "ID", "Title", "ISBN", "Available", "Status"
    );
    for book in &all {
        println!(
            "{:<6} {:<40} {:<15} {:<12} {:<8}",
            book.id.to_string(),
            truncate(&book.title, 38),
            book.isbn,
            format!("{}/{}", book.available_copies, book.total_copies),
            if book.active { "active" } else { "inactive" }
        );
    }
    println!("\nTotal: {} book(s)", all.len());
    Ok(())
}

pub fn show_book(store: &Store, matches: &ArgMatches) -> Result<()> {
    let id = id_arg(matches, "id")?;
    let book =
        books::get_book(store, id.into()).ok_or_else(|| anyhow!("Book {} not found", id))?;
    print_book(store, &book);
    Ok(())
}

pub fn update_book(store: &Store, matches: &ArgMatches) -> Result<()> {
    let id = id_arg(matches, "id")?;
    let update = books::BookUpdate {
        title: matches
            .get_one::<String>("title")
            .map(|s| check(input::validate_text("Title", s)))
            .transpose()?,
        isbn: matches
            .get_one::<String>("isbn")
            .map(|s| check(input::validate_isbn(s)))
            .transpose()?,
        author_id: matches
            .get_one::<String>("author")
            .map(|s| check(input::validate_id(s)).map(Into::into))
            .transpose()?,
        category_id: matches
            .get_one::<String>("category")
            .map(|s| check(input::validate_id(s)).map(Into::into))
            .transpose()?,
        publication_year: matches
            .get_one::<String>("year")
            .map(|s| check(input::validate_year(s)))
            .transpose()?,
        total_copies: matches
            .get_one::<String>("copies")
            .map(|s| check(input::validate_copies(s)))
            .transpose()?,
    };

    let updated =
        books::update_book(store, id.into(), update).context("Failed to update book")?;
    if !updated {
        return Err(anyhow!("Book {} not found", id));
    }
    println!("{} Book #{} updated", ok_mark(), id);
    Ok(())
}

pub fn deactivate_book(store: &Store, matches: &ArgMatches) -> Result<()> {
    let id = id_arg(matches, "id")?;
    let deactivated =
        books::deactivate_book(store, id.into()).context("Failed to deactivate book")?;
    if !deactivated {
        return Err(anyhow!("Book {} not found", id));
    }
    println!("{} Book #{} deactivated", ok_mark(), id);
    Ok(())
}

pub(crate) fn print_book(store: &Store, book: &Book) {
    print_header("Book");
    println!("ID: {}", book.id);
    println!("Title: {}", style(&book.title).bold());
    println!("ISBN: {}", book.isbn);
    match authors::get_author(store, book.author_id) {
        Some(author) => println!("Author: {} (#{})", author.full_name(), author.id),
        None => println!("Author: #{}", book.author_id),
    }
    match categories::get_category(store, book.category_id) {
        Some(category) => println!("Category: {} (#{})", category.name, category.id),
        None => println!("Category: #{}", book.category_id),
    }
    println!("Publication year: {}", book.publication_year);
    println!(
        "Copies: {} available of {}",
        book.available_copies, book.total_copies
    );
    println!("Status: {}", if book.active { "active" } else { "inactive" });
}

// Members

pub fn add_member(store: &Store, matches: &ArgMatches) -> Result<()> {
    let new = members::NewMember {
        first_name: check(input::validate_text("First name", required(matches, "first-name")?))?,
        last_name: check(input::validate_text("Last name", required(matches, "last-name")?))?,
        email: check(input::validate_email(required(matches, "email")?))?,
        phone: check(input::validate_phone(required(matches, "phone")?))?,
        address: check(input::validate_text("Address", required(matches, "address")?))?,
    };

    let member = members::create_member(store, new).context("Failed to create member")?;
    println!(
        "{} Member #{} registered: {}",
        ok_mark(),
        member.id,
        member.full_name()
    );
    Ok(())
}

pub fn list_members(store: &Store) -> Result<()> {
    let all = members::list_members(store);
    if all.is_empty() {
        println!("No members registered. Use 'members add' to create one.");
        return Ok(());
    }

    print_header("Members");
    println!(
        "{:<6} {:<30} {:<30} {:<8} {:<8}",
        "ID", "Name", "Email", "Fines", "Status"
    );
    for member in &all {
        println!(
            "{:<6} {:<30} {:<30} {:<8} {:<8}",
            member.id.to_string(),
            member.full_name(),
            member.email,
            member.pending_fines_count.to_string(),
            if member.active { "active" } else { "inactive" }
        );
    }
    println!("\nTotal: {} member(s)", all.len());
    Ok(())
}

pub fn show_member(store: &Store, matches: &ArgMatches) -> Result<()> {
    let id = id_arg(matches, "id")?;
    let member = members::get_member(store, id.into())
        .ok_or_else(|| anyhow!("Member {} not found", id))?;
    print_member(&member);
    Ok(())
}

pub fn update_member(store: &Store, matches: &ArgMatches) -> Result<()> {
    let id = id_arg(matches, "id")?;
    let update = members::MemberUpdate {
        first_name: matches
            .get_one::<String>("first-name")
            .map(|s| check(input::validate_text("First name", s)))
            .transpose()?,
        last_name: matches
            .get_one::<String>("last-name")
            .map(|s| check(input::validate_text("Last name", s)))
            .transpose()?,
        email: matches
            .get_one::<String>("email")
            .map(|s| check(input::validate_email(s)))
            .transpose()?,
        phone: matches
            .get_one::<String>("phone")
            .map(|s| check(input::validate_phone(s)))
            .transpose()?,
        address: matches
            .get_one::<String>("address")
            .map(|s| check(input::validate_text("Address", s)))
            .transpose()?,
    };

    let updated = members::update_member(store, id.into(), update)
        .context("Failed to update member")?;
    if !updated {
        return Err(anyhow!("Member {} not found", id));
    }
    println!("{} Member #{} updated", ok_mark(), id);
    Ok(())
}

pub fn deactivate_member(store: &Store, matches: &ArgMatches) -> Result<()> {
    let id = id_arg(matches, "id")?;
    let deactivated = members::deactivate_member(store, id.into())
        .context("Failed to deactivate member")?;
    if !deactivated {
        return Err(anyhow!("Member {} not found", id));
    }
    println!("{} Member #{} deactivated", ok_mark(), id);
    Ok(())
}

pub(crate) fn print_member(member: &Member) {
    print_header("Member");
    println!("ID: {}", member.id);
    println!("Name: {}", style(member.full_name()).bold());
    println!("Email: {}", member.email);
    println!("Phone: {}", member.phone);
    println!("Address: {}", member.address);
    println!(
        "Status: {}",
        if member.active { "active" } else { "inactive" }
    );
    if member.pending_fines_count > 0 {
        println!(
            "Pending fines: {}",
            style(member.pending_fines_count).yellow().bold()
        );
    } else {
        println!("Pending fines: 0");
    }
}

// Loans

pub fn checkout(manager: &CirculationManager, matches: &ArgMatches) -> Result<()> {
    let member_id = id_arg(matches, "member")?.into();
    let book_id = id_arg(matches, "book")?.into();

    let loan = match date_arg(matches)? {
        Some(on) => manager.create_loan_at(member_id, book_id, on),
        None => manager.create_loan(member_id, book_id),
    }
    .context("Checkout refused")?;

    println!("{} Loan #{} registered", ok_mark(), loan.id);
    println!("  Member: #{}", loan.member_id);
    println!("  Book: #{}", loan.book_id);
    println!("  Due: {}", style(loan.expected_return_date).bold());
    Ok(())
}

pub fn return_book(manager: &CirculationManager, matches: &ArgMatches) -> Result<()> {
    let loan_id = id_arg(matches, "id")?.into();

    let outcome = match date_arg(matches)? {
        Some(on) => manager.return_loan_at(loan_id, on),
        None => manager.return_loan(loan_id),
    }
    .context("Return refused")?;

    println!("{} Loan #{} returned", ok_mark(), outcome.loan.id);
    match outcome.fine {
        Some(fine) => {
            println!(
                "  {} {} day(s) late: fine #{} for {:.2} issued",
                style("!").yellow().bold(),
                outcome.days_late,
                fine.id,
                fine.amount
            );
        }
        None => println!("  Returned on time"),
    }
    Ok(())
}

pub fn list_loans(manager: &CirculationManager, matches: &ArgMatches) -> Result<()> {
    let active_only = matches.get_flag("active");
    let loans = if active_only {
        manager.active_loans()
    } else {
        manager.loans()
    };

    if loans.is_empty() {
        println!(
            "No {}loans registered.",
            if active_only { "active " } else { "" }
        );
        return Ok(());
    }

    print_header(if active_only { "Active Loans" } else { "Loans" });
    println!(
        "{:<6} {:<8} {:<8} {:<12} {:<12} {:<10}",
        "ID", "Member", "Book", "Loaned", "Due", "Status"
    );
    for loan in &loans {
        println!(
            "{:<6} {:<8} {:<8} {:<12} {:<12} {:<10}",
            loan.id.to_string(),
            format!("#{}", loan.member_id),
            format!("#{}", loan.book_id),
            loan.loan_date.to_string(),
            loan.expected_return_date.to_string(),
            loan.status.to_string()
        );
    }
    println!("\nTotal: {} loan(s)", loans.len());
    Ok(())
}

pub fn show_loan(manager: &CirculationManager, matches: &ArgMatches) -> Result<()> {
    let id = id_arg(matches, "id")?;
    let loan = manager
        .loan(id.into())
        .ok_or_else(|| anyhow!("Loan {} not found", id))?;
    print_loan(&loan);
    Ok(())
}

pub(crate) fn print_loan(loan: &Loan) {
    print_header("Loan");
    println!("ID: {}", loan.id);
    println!("Member: #{}", loan.member_id);
    println!("Book: #{}", loan.book_id);
    println!("Loaned: {}", loan.loan_date);
    println!("Due: {}", loan.expected_return_date);
    match loan.actual_return_date {
        Some(returned) => println!("Returned: {}", returned),
        None => println!("Returned: -"),
    }
    let status = match loan.status {
        LoanStatus::Active => style("active").green(),
        LoanStatus::Returned => style("returned").dim(),
    };
    println!("Status: {}", status);
    if loan.fine_generated {
        println!("{}", style("A fine was generated for this loan").yellow());
    }
}

// Fines

pub fn add_fine(manager: &CirculationManager, matches: &ArgMatches) -> Result<()> {
    let member_id = id_arg(matches, "member")?.into();
    let amount = check(input::validate_amount(required(matches, "amount")?))?;
    let reason = check(input::validate_text("Reason", required(matches, "reason")?))?;

    let fine = match date_arg(matches)? {
        Some(on) => manager.create_fine_at(member_id, amount, &reason, on),
        None => manager.create_fine(member_id, amount, &reason),
    }
    .context("Fine refused")?;

    println!(
        "{} Fine #{} issued to member #{} for {:.2}",
        ok_mark(),
        fine.id,
        fine.member_id,
        fine.amount
    );
    Ok(())
}

pub fn pay_fine(manager: &CirculationManager, matches: &ArgMatches) -> Result<()> {
    let fine_id = id_arg(matches, "id")?.into();

    let fine = match date_arg(matches)? {
        Some(on) => manager.pay_fine_at(fine_id, on),
        None => manager.pay_fine(fine_id),
    }
    .context("Payment refused")?;

    println!("{} Fine #{} paid ({:.2})", ok_mark(), fine.id, fine.amount);
    Ok(())
}

pub fn list_fines(manager: &CirculationManager, matches: &ArgMatches) -> Result<()> {
    let pending_only = matches.get_flag("pending");
    let fines = if pending_only {
        manager.pending_fines()
    } else {
        manager.fines()
    };

    if fines.is_empty() {
        println!(
            "No {}fines registered.",
            if pending_only { "pending " } else { "" }
        );
        return Ok(());
    }

    print_header(if pending_only { "Pending Fines" } else { "Fines" });
    println!(
        "{:<6} {:<8} {:<10} {:<30} {:<12} {:<8}",
        "ID", "Member", "Amount", "Reason", "Issued", "Status"
    );
    for fine in &fines {
        println!(
            "{:<6} {:<8} {:<10} {:<30} {:<12} {:<8}",
            fine.id.to_string(),
            format!("#{}", fine.member_id),
            format!("{:.2}", fine.amount),
            truncate(&fine.reason, 28),
            fine.generation_date.to_string(),
            fine.status.to_string()
        );
    }
    println!("\nTotal: {} fine(s)", fines.len());
    if pending_only {
        println!("Pending amount: {:.2}", manager.pending_fines_total());
    }
    Ok(())
}

pub fn show_fine(manager: &CirculationManager, matches: &ArgMatches) -> Result<()> {
    let id = id_arg(matches, "id")?;
    let fine = manager
        .fine(id.into())
        .ok_or_else(|| anyhow!("Fine {} not found", id))?;
    print_fine(&fine);
    Ok(())
}

pub(crate) fn print_fine(fine: &Fine) {
    print_header("Fine");
    println!("ID: {}", fine.id);
    println!("Member: #{}", fine.member_id);
    println!("Amount: {:.2}", fine.amount);
    println!("Reason: {}", fine.reason);
    println!("Issued: {}", fine.generation_date);
    match fine.payment_date {
        Some(paid) => println!("Paid: {}", paid),
        None => println!("Paid: -"),
    }
    let status = match fine.status {
        FineStatus::Pending => style("pending").yellow(),
        FineStatus::Paid => style("paid").green(),
    };
    println!("Status: {}", status);
}

// Config

pub fn config_init(config_manager: &ConfigManager) -> Result<()> {
    let created = config_manager
        .initialize()
        .context("Failed to initialize config")?;
    if created {
        println!(
            "{} Config file created at {}",
            ok_mark(),
            config_manager.config_path().display()
        );
    } else {
        println!(
            "Config file already exists at {}",
            config_manager.config_path().display()
        );
    }
    Ok(())
}

pub fn config_show(config_manager: &ConfigManager) -> Result<()> {
    let config = config_manager.load().context("Failed to load config")?;
    let rendered =
        toml::to_string_pretty(&config).context("Failed to render config")?;
    print_header("Configuration");
    print!("{}", rendered);
    Ok(())
}

pub fn config_path(config_manager: &ConfigManager) -> Result<()> {
    println!("{}", config_manager.config_path().display());
    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        format!("{}...", s.chars().take(max_len).collect::<String>())
    }
}

#[cfg(test)]
mod tests;
