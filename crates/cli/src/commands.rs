//! The record operations behind each menu entry

use crate::prompt::Prompter;
use anyhow::{Context, Result};
use bookshelf_catalog::Catalog;
use bookshelf_core::{Book, BookFields};
use console::style;
use std::io::{BufRead, Write};

/// Prompt for a new book and add it
pub fn add_book<R: BufRead, W: Write>(catalog: &Catalog, io: &mut Prompter<R, W>) -> Result<()> {
    let title = io.ask("Enter title of book: ")?;
    let author = io.ask("Enter author of book: ")?;
    let publisher = io.ask("Enter publisher of book: ")?;
    let year = io.ask_year()?;

    let book = catalog
        .add(BookFields::new(title, author, publisher, year))
        .context("Failed to add book to catalog")?;

    io.separator()?;
    writeln!(io, "{}", style("Book added successfully.").green())?;
    writeln!(io, "  ID: {}", book.id)?;

    Ok(())
}

/// List every book as `id. title`, pausing between pages
pub fn list_books<R: BufRead, W: Write>(
    catalog: &Catalog,
    io: &mut Prompter<R, W>,
    page_size: usize,
) -> Result<()> {
    let pages = catalog
        .pages(page_size)
        .context("Failed to list books")?;

    if pages.is_empty() {
        writeln!(io, "No books in catalog. Use 'Add Book' to create one.")?;
        return Ok(());
    }

    for page in pages {
        writeln!(io, "\t\tPage {}", page.number)?;
        io.separator()?;

        for book in &page.books {
            writeln!(io, "{}. {}", book.id, book.title)?;
        }

        if !page.is_last() {
            io.separator()?;
            io.wait_for_ack("Press any key for next page (ex. 'n'): ")?;
            io.separator()?;
        }
    }

    Ok(())
}

/// Ask for an id, show the book and replace its fields
pub fn update_book<R: BufRead, W: Write>(
    catalog: &Catalog,
    io: &mut Prompter<R, W>,
) -> Result<()> {
    let id = io.ask_id("Enter ID of book to update: ")?;

    let updated = catalog.update_with(id, |current| -> Result<BookFields> {
        writeln!(io)?;
        writeln!(io, "{}", style("----- Current Book Details -----").bold())?;
        print_fields(io, current)?;
        io.separator()?;

        let title = io.ask("Enter new title: ")?;
        let author = io.ask("Enter new author name: ")?;
        let publisher = io.ask("Enter new publisher name: ")?;
        let year = io.ask_year()?;

        Ok(BookFields::new(title, author, publisher, year))
    })?;

    io.separator()?;
    match updated {
        Some(_) => writeln!(io, "{}", style("Book updated successfully").green())?,
        None => writeln!(io, "{}", style("Book not found").yellow())?,
    }

    Ok(())
}

/// Ask for an id and remove that book
pub fn delete_book<R: BufRead, W: Write>(
    catalog: &Catalog,
    io: &mut Prompter<R, W>,
) -> Result<()> {
    let id = io.ask_id("Enter ID of book to delete: ")?;

    let removed = catalog
        .delete(id)
        .context("Failed to delete book")?;

    io.separator()?;
    match removed {
        Some(book) => {
            writeln!(io, "Recently deleted book: {}", book.title)?;
            io.separator()?;
            writeln!(io, "{}", style("Book deleted successfully").green())?;
        }
        None => writeln!(io, "{}", style("Book not found").yellow())?,
    }

    Ok(())
}

/// Print each distinct author once
pub fn list_authors<R: BufRead, W: Write>(
    catalog: &Catalog,
    io: &mut Prompter<R, W>,
) -> Result<()> {
    let authors = catalog.authors().context("Failed to list authors")?;

    for author in authors {
        writeln!(io, "{}", author)?;
    }

    Ok(())
}

/// Ask for an id and show that book's details
pub fn view_book<R: BufRead, W: Write>(
    catalog: &Catalog,
    io: &mut Prompter<R, W>,
) -> Result<()> {
    let id = io.ask_id("Enter ID of book to view details: ")?;

    let book = catalog.get(id).context("Failed to get book")?;

    if let Some(book) = &book {
        writeln!(io)?;
        writeln!(io, "{}", style("----- Book Details -----").bold())?;
        print_fields(io, book)?;
    }

    io.separator()?;
    match book {
        Some(_) => writeln!(io, "{}", style("Book found").green())?,
        None => writeln!(io, "{}", style("Book not found").yellow())?,
    }

    Ok(())
}

fn print_fields<W: Write>(out: &mut W, book: &Book) -> std::io::Result<()> {
    writeln!(out, "Title: {}", book.title)?;
    writeln!(out, "Author: {}", book.author)?;
    writeln!(out, "Publisher: {}", book.publisher)?;
    writeln!(out, "Publish Year: {}", book.year_published)
}
