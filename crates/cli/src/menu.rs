//! Interactive hierarchical menu
//!
//! Mirrors the subcommand surface as a numeric menu: a top level with one
//! submenu per entity area, each leaf invoking exactly one library
//! operation. Invalid selections reprint the menu; `0` backs out one
//! level, and `0` at the top level exits. Operation failures are printed
//! and the loop continues, so one refused action never ends the session.

use anyhow::Result;
use biblio_circulation::CirculationManager;
use biblio_store::repos::{authors, books, categories, members};
use biblio_store::Store;
use console::style;

use crate::commands;
use crate::input::{self, prompt, prompt_optional, read_line};

pub fn run(store: &Store, manager: &CirculationManager) -> Result<()> {
    loop {
        println!("\n{}", "=".repeat(50));
        println!("{}", style("  Library Management System").bold().cyan());
        println!("{}", "=".repeat(50));
        println!("\n1. Books");
        println!("2. Members");
        println!("3. Loans");
        println!("4. Fines");
        println!("5. Categories");
        println!("6. Authors");
        println!("0. Exit");

        match read_line("\nSelect an option: ")?.as_str() {
            "1" => books_menu(store)?,
            "2" => members_menu(store)?,
            "3" => loans_menu(manager)?,
            "4" => fines_menu(manager)?,
            "5" => categories_menu(store)?,
            "6" => authors_menu(store)?,
            "0" => {
                println!("\nGoodbye.");
                return Ok(());
            }
            _ => println!("\n{} Invalid option, try again.", style("!").red().bold()),
        }
    }
}

fn report<T>(result: anyhow::Result<T>) {
    if let Err(e) = result {
        println!("{} {:#}", style("✗").red().bold(), e);
    }
}

fn books_menu(store: &Store) -> Result<()> {
    loop {
        println!("\n{}", style("Books").bold());
        println!("1. Register new book");
        println!("2. List all books");
        println!("3. Find book");
        println!("4. Update book");
        println!("5. Deactivate book");
        println!("0. Back");

        match read_line("\nSelect an option: ")?.as_str() {
            "1" => report(register_book(store)),
            "2" => report(commands::list_books(store)),
            "3" => report(find_book(store)),
            "4" => report(update_book(store)),
            "5" => report(deactivate_book(store)),
            "0" => return Ok(()),
            _ => println!("\n{} Invalid option, try again.", style("!").red().bold()),
        }
    }
}

fn register_book(store: &Store) -> Result<()> {
    let new = books::NewBook {
        title: prompt("Title", |s| input::validate_text("Title", s))?,
        isbn: prompt("ISBN", input::validate_isbn)?,
        author_id: prompt("Author id", input::validate_id)?.into(),
        category_id: prompt("Category id", input::validate_id)?.into(),
        publication_year: prompt("Publication year", input::validate_year)?,
        total_copies: prompt("Total copies", input::validate_copies)?,
    };
    let book = books::create_book(store, new)?;
    println!(
        "{} Book #{} registered: {}",
        commands::ok_mark(),
        book.id,
        book.title
    );
    Ok(())
}

fn find_book(store: &Store) -> Result<()> {
    let id = prompt("Book id", input::validate_id)?;
    match books::get_book(store, id.into()) {
        Some(book) => commands::print_book(store, &book),
        None => println!("Book {} not found", id),
    }
    Ok(())
}

fn update_book(store: &Store) -> Result<()> {
    let id = prompt("Book id", input::validate_id)?;
    let update = books::BookUpdate {
        title: prompt_optional("Title", |s| input::validate_text("Title", s))?,
        isbn: prompt_optional("ISBN", input::validate_isbn)?,
        author_id: prompt_optional("Author id", input::validate_id)?.map(Into::into),
        category_id: prompt_optional("Category id", input::validate_id)?.map(Into::into),
        publication_year: prompt_optional("Publication year", input::validate_year)?,
        total_copies: prompt_optional("Total copies", input::validate_copies)?,
    };
    if books::update_book(store, id.into(), update)? {
        println!("{} Book #{} updated", commands::ok_mark(), id);
    } else {
        println!("Book {} not found", id);
    }
    Ok(())
}

fn deactivate_book(store: &Store) -> Result<()> {
    let id = prompt("Book id", input::validate_id)?;
    if books::deactivate_book(store, id.into())? {
        println!("{} Book #{} deactivated", commands::ok_mark(), id);
    } else {
        println!("Book {} not found", id);
    }
    Ok(())
}

fn members_menu(store: &Store) -> Result<()> {
    loop {
        println!("\n{}", style("Members").bold());
        println!("1. Register new member");
        println!("2. List all members");
        println!("3. Find member");
        println!("4. Update member");
        println!("5. Deactivate member");
        println!("0. Back");

        match read_line("\nSelect an option: ")?.as_str() {
            "1" => report(register_member(store)),
            "2" => report(commands::list_members(store)),
            "3" => report(find_member(store)),
            "4" => report(update_member(store)),
            "5" => report(deactivate_member(store)),
            "0" => return Ok(()),
            _ => println!("\n{} Invalid option, try again.", style("!").red().bold()),
        }
    }
}

fn register_member(store: &Store) -> Result<()> {
    let new = members::NewMember {
        first_name: prompt("First name", |s| input::validate_text("First name", s))?,
        last_name: prompt("Last name", |s| input::validate_text("Last name", s))?,
        email: prompt("Email", input::validate_email)?,
        phone: prompt("Phone", input::validate_phone)?,
        address: prompt("Address", |s| input::validate_text("Address", s))?,
    };
    let member = members::create_member(store, new)?;
    println!(
        "{} Member #{} registered: {}",
        commands::ok_mark(),
        member.id,
        member.full_name()
    );
    Ok(())
}

fn find_member(store: &Store) -> Result<()> {
    let id = prompt("Member id", input::validate_id)?;
    match members::get_member(store, id.into()) {
        Some(member) => commands::print_member(&member),
        None => println!("Member {} not found", id),
    }
    Ok(())
}

fn update_member(store: &Store) -> Result<()> {
    let id = prompt("Member id", input::validate_id)?;
    let update = members::MemberUpdate {
        first_name: prompt_optional("First name", |s| input::validate_text("First name", s))?,
        last_name: prompt_optional("Last name", |s| input::validate_text("Last name", s))?,
        email: prompt_optional("Email", input::validate_email)?,
        phone: prompt_optional("Phone", input::validate_phone)?,
        address: prompt_optional("Address", |s| input::validate_text("Address", s))?,
    };
    if members::update_member(store, id.into(), update)? {
        println!("{} Member #{} updated", commands::ok_mark(), id);
    } else {
        println!("Member {} not found", id);
    }
    Ok(())
}

fn deactivate_member(store: &Store) -> Result<()> {
    let id = prompt("Member id", input::validate_id)?;
    if members::deactivate_member(store, id.into())? {
        println!("{} Member #{} deactivated", commands::ok_mark(), id);
    } else {
        println!("Member {} not found", id);
    }
    Ok(())
}

fn loans_menu(manager: &CirculationManager) -> Result<()> {
    loop {
        println!("\n{}", style("Loans").bold());
        println!("1. Register new loan");
        println!("2. Return book");
        println!("3. List all loans");
        println!("4. List active loans");
        println!("5. Find loan");
        println!("0. Back");

        match read_line("\nSelect an option: ")?.as_str() {
            "1" => report(register_loan(manager)),
            "2" => report(return_book(manager)),
            "3" => report(print_loans(manager.loans())),
            "4" => report(print_loans(manager.active_loans())),
            "5" => report(find_loan(manager)),
            "0" => return Ok(()),
            _ => println!("\n{} Invalid option, try again.", style("!").red().bold()),
        }
    }
}

fn register_loan(manager: &CirculationManager) -> Result<()> {
    let member_id = prompt("Member id", input::validate_id)?.into();
    let book_id = prompt("Book id", input::validate_id)?.into();
    let loan = manager.create_loan(member_id, book_id)?;
    println!(
        "{} Loan #{} registered, due {}",
        commands::ok_mark(),
        loan.id,
        loan.expected_return_date
    );
    Ok(())
}

fn return_book(manager: &CirculationManager) -> Result<()> {
    let loan_id = prompt("Loan id", input::validate_id)?.into();
    let outcome = manager.return_loan(loan_id)?;
    println!("{} Loan #{} returned", commands::ok_mark(), outcome.loan.id);
    if let Some(fine) = outcome.fine {
        println!(
            "  {} {} day(s) late: fine #{} for {:.2} issued",
            style("!").yellow().bold(),
            outcome.days_late,
            fine.id,
            fine.amount
        );
    }
    Ok(())
}

fn print_loans(loans: Vec<biblio_core::Loan>) -> Result<()> {
    if loans.is_empty() {
        println!("No loans registered.");
        return Ok(());
    }
    for loan in &loans {
        commands::print_loan(loan);
    }
    println!("\nTotal: {} loan(s)", loans.len());
    Ok(())
}

fn find_loan(manager: &CirculationManager) -> Result<()> {
    let id = prompt("Loan id", input::validate_id)?;
    match manager.loan(id.into()) {
        Some(loan) => commands::print_loan(&loan),
        None => println!("Loan {} not found", id),
    }
    Ok(())
}

fn fines_menu(manager: &CirculationManager) -> Result<()> {
    loop {
        println!("\n{}", style("Fines").bold());
        println!("1. Register new fine");
        println!("2. Pay fine");
        println!("3. List all fines");
        println!("4. List pending fines");
        println!("5. Find fine");
        println!("0. Back");

        match read_line("\nSelect an option: ")?.as_str() {
            "1" => report(register_fine(manager)),
            "2" => report(pay_fine(manager)),
            "3" => report(print_fines(manager, false)),
            "4" => report(print_fines(manager, true)),
            "5" => report(find_fine(manager)),
            "0" => return Ok(()),
            _ => println!("\n{} Invalid option, try again.", style("!").red().bold()),
        }
    }
}

fn register_fine(manager: &CirculationManager) -> Result<()> {
    let member_id = prompt("Member id", input::validate_id)?.into();
    let amount = prompt("Amount", input::validate_amount)?;
    let reason = prompt("Reason", |s| input::validate_text("Reason", s))?;
    let fine = manager.create_fine(member_id, amount, &reason)?;
    println!(
        "{} Fine #{} issued for {:.2}",
        commands::ok_mark(),
        fine.id,
        fine.amount
    );
    Ok(())
}

fn pay_fine(manager: &CirculationManager) -> Result<()> {
    let fine_id = prompt("Fine id", input::validate_id)?.into();
    let fine = manager.pay_fine(fine_id)?;
    println!(
        "{} Fine #{} paid ({:.2})",
        commands::ok_mark(),
        fine.id,
        fine.amount
    );
    Ok(())
}

fn print_fines(manager: &CirculationManager, pending_only: bool) -> Result<()> {
    let fines = if pending_only {
        manager.pending_fines()
    } else {
        manager.fines()
    };
    if fines.is_empty() {
        println!("No fines registered.");
        return Ok(());
    }
    for fine in &fines {
        commands::print_fine(fine);
    }
    println!("\nTotal: {} fine(s)", fines.len());
    if pending_only {
        println!("Pending amount: {:.2}", manager.pending_fines_total());
    }
    Ok(())
}

fn find_fine(manager: &CirculationManager) -> Result<()> {
    let id = prompt("Fine id", input::validate_id)?;
    match manager.fine(id.into()) {
        Some(fine) => commands::print_fine(&fine),
        None => println!("Fine {} not found", id),
    }
    Ok(())
}

fn categories_menu(store: &Store) -> Result<()> {
    loop {
        println!("\n{}", style("Categories").bold());
        println!("1. Register new category");
        println!("2. List all categories");
        println!("3. Find category");
        println!("4. Update category");
        println!("5. Remove category");
        println!("0. Back");

        match read_line("\nSelect an option: ")?.as_str() {
            "1" => report(register_category(store)),
            "2" => report(commands::list_categories(store)),
            "3" => report(find_category(store)),
            "4" => report(update_category(store)),
            "5" => report(remove_category(store)),
            "0" => return Ok(()),
            _ => println!("\n{} Invalid option, try again.", style("!").red().bold()),
        }
    }
}

fn register_category(store: &Store) -> Result<()> {
    let new = categories::NewCategory {
        name: prompt("Name", |s| input::validate_text("Name", s))?,
        description: prompt("Description", |s| input::validate_text("Description", s))?,
    };
    let category = categories::create_category(store, new)?;
    println!(
        "{} Category #{} registered: {}",
        commands::ok_mark(),
        category.id,
        category.name
    );
    Ok(())
}

fn find_category(store: &Store) -> Result<()> {
    let id = prompt("Category id", input::validate_id)?;
    match categories::get_category(store, id.into()) {
        Some(category) => commands::print_category(&category),
        None => println!("Category {} not found", id),
    }
    Ok(())
}

fn update_category(store: &Store) -> Result<()> {
    let id = prompt("Category id", input::validate_id)?;
    let update = categories::CategoryUpdate {
        name: prompt_optional("Name", |s| input::validate_text("Name", s))?,
        description: prompt_optional("Description", |s| input::validate_text("Description", s))?,
    };
    if categories::update_category(store, id.into(), update)? {
        println!("{} Category #{} updated", commands::ok_mark(), id);
    } else {
        println!("Category {} not found", id);
    }
    Ok(())
}

fn remove_category(store: &Store) -> Result<()> {
    let id = prompt("Category id", input::validate_id)?;
    if categories::remove_category(store, id.into())? {
        println!("{} Category #{} removed", commands::ok_mark(), id);
    } else {
        println!("Category {} not found", id);
    }
    Ok(())
}

fn authors_menu(store: &Store) -> Result<()> {
    loop {
        println!("\n{}", style("Authors").bold());
        println!("1. Register new author");
        println!("2. List all authors");
        println!("3. Find author");
        println!("4. Update author");
        println!("5. Remove author");
        println!("0. Back");

        match read_line("\nSelect an option: ")?.as_str() {
            "1" => report(register_author(store)),
            "2" => report(commands::list_authors(store)),
            "3" => report(find_author(store)),
            "4" => report(update_author(store)),
            "5" => report(remove_author(store)),
            "0" => return Ok(()),
            _ => println!("\n{} Invalid option, try again.", style("!").red().bold()),
        }
    }
}

fn register_author(store: &Store) -> Result<()> {
    let new = authors::NewAuthor {
        first_name: prompt("First name", |s| input::validate_text("First name", s))?,
        last_name: prompt("Last name", |s| input::validate_text("Last name", s))?,
        nationality: prompt("Nationality", |s| input::validate_text("Nationality", s))?,
    };
    let author = authors::create_author(store, new)?;
    println!(
        "{} Author #{} registered: {}",
        commands::ok_mark(),
        author.id,
        author.full_name()
    );
    Ok(())
}

fn find_author(store: &Store) -> Result<()> {
    let id = prompt("Author id", input::validate_id)?;
    match authors::get_author(store, id.into()) {
        Some(author) => commands::print_author(&author),
        None => println!("Author {} not found", id),
    }
    Ok(())
}

fn update_author(store: &Store) -> Result<()> {
    let id = prompt("Author id", input::validate_id)?;
    let update = authors::AuthorUpdate {
        first_name: prompt_optional("First name", |s| input::validate_text("First name", s))?,
        last_name: prompt_optional("Last name", |s| input::validate_text("Last name", s))?,
        nationality: prompt_optional("Nationality", |s| input::validate_text("Nationality", s))?,
    };
    if authors::update_author(store, id.into(), update)? {
        println!("{} Author #{} updated", commands::ok_mark(), id);
    } else {
        println!("Author {} not found", id);
    }
    Ok(())
}

fn remove_author(store: &Store) -> Result<()> {
    let id = prompt("Author id", input::validate_id)?;
    if authors::remove_author(store, id.into())? {
        println!("{} Author #{} removed", commands::ok_mark(), id);
    } else {
        println!("Author {} not found", id);
    }
    Ok(())
}
