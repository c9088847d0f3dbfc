//! Interactive menu loop
//!
//! The shell shows the menu, reads a choice, runs the matching command and
//! shows the menu again until the user quits or input ends.

use crate::commands;
use crate::prompt::{PromptError, Prompter, SEPARATOR};
use anyhow::Result;
use bookshelf_catalog::Catalog;
use console::style;
use std::io::{BufRead, Write};

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddBook,
    ListBooks,
    UpdateBook,
    DeleteBook,
    ListAuthors,
    ViewBook,
    Quit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::AddBook,
        MenuChoice::ListBooks,
        MenuChoice::UpdateBook,
        MenuChoice::DeleteBook,
        MenuChoice::ListAuthors,
        MenuChoice::ViewBook,
        MenuChoice::Quit,
    ];

    /// Matches trimmed input against "1" through "7"
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddBook),
            "2" => Some(Self::ListBooks),
            "3" => Some(Self::UpdateBook),
            "4" => Some(Self::DeleteBook),
            "5" => Some(Self::ListAuthors),
            "6" => Some(Self::ViewBook),
            "7" => Some(Self::Quit),
            _ => None,
        }
    }

    pub fn key(&self) -> usize {
        match self {
            Self::AddBook => 1,
            Self::ListBooks => 2,
            Self::UpdateBook => 3,
            Self::DeleteBook => 4,
            Self::ListAuthors => 5,
            Self::ViewBook => 6,
            Self::Quit => 7,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AddBook => "Add Book",
            Self::ListBooks => "List Books",
            Self::UpdateBook => "Update Book",
            Self::DeleteBook => "Delete Book",
            Self::ListAuthors => "List Authors",
            Self::ViewBook => "View Book Details",
            Self::Quit => "Quit",
        }
    }
}

/// Where the shell is after handling one input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    MenuDisplayed,
    Exited,
}

pub struct Shell<R, W> {
    catalog: Catalog,
    io: Prompter<R, W>,
    page_size: usize,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(catalog: Catalog, io: Prompter<R, W>, page_size: usize) -> Self {
        Self {
            catalog,
            io,
            page_size,
        }
    }

    /// Runs the menu loop until the user quits or input ends
    ///
    /// Catalog failures end the loop with an error. Nothing partial is
    /// written to the catalog file in that case.
    pub fn run(&mut self) -> Result<()> {
        log::debug!("Shell started on {}", self.catalog.path().display());

        loop {
            match self.step() {
                Ok(ShellState::MenuDisplayed) => continue,
                Ok(ShellState::Exited) => return Ok(()),
                Err(e) if is_end_of_input(&e) => {
                    log::debug!("Input closed, leaving shell");
                    writeln!(self.io)?;
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Shows the menu, reads one choice and runs it
    pub fn step(&mut self) -> Result<ShellState> {
        self.print_menu()?;

        let answer = self.io.ask("Enter your choice (1 to 7): ")?;
        self.io.separator()?;

        let Some(choice) = MenuChoice::parse(&answer) else {
            writeln!(
                self.io,
                "{}",
                style("Invalid choice. Please enter a number from 1 to 7.").red()
            )?;
            return Ok(ShellState::MenuDisplayed);
        };

        if choice == MenuChoice::Quit {
            writeln!(self.io, "Goodbye!")?;
            return Ok(ShellState::Exited);
        }

        writeln!(self.io, "{}", choice.label())?;
        self.io.separator()?;
        self.dispatch(choice)?;

        Ok(ShellState::MenuDisplayed)
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        let catalog = &self.catalog;
        let io = &mut self.io;

        match choice {
            MenuChoice::AddBook => commands::add_book(catalog, io),
            MenuChoice::ListBooks => commands::list_books(catalog, io, self.page_size),
            MenuChoice::UpdateBook => commands::update_book(catalog, io),
            MenuChoice::DeleteBook => commands::delete_book(catalog, io),
            MenuChoice::ListAuthors => commands::list_authors(catalog, io),
            MenuChoice::ViewBook => commands::view_book(catalog, io),
            MenuChoice::Quit => Ok(()),
        }
    }

    fn print_menu(&mut self) -> std::io::Result<()> {
        let io = &mut self.io;

        writeln!(io, "{}", SEPARATOR)?;
        writeln!(io, "\n\t{}", style("Book Management Tool").bold().cyan())?;
        writeln!(io, "{}", SEPARATOR)?;
        writeln!(io, "\t*** Menu ***")?;
        writeln!(io, "{}", SEPARATOR)?;
        for choice in MenuChoice::ALL {
            writeln!(io, "{}. {}", choice.key(), choice.label())?;
        }
        writeln!(io, "{}", SEPARATOR)
    }
}

fn is_end_of_input(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<PromptError>(),
        Some(PromptError::EndOfInput)
    )
}
