use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::persistence::{self, PersistenceError};
use crate::store::{CdRecord, Inventory};

use super::display;

/// Menu commands accepted at the main prompt. Anything else is rejected at
/// the read step, so the dispatch match needs no fallback arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Load,
    Add,
    Inspect,
    Delete,
    Save,
    Exit,
}

impl Command {
    fn parse(input: &str) -> Option<Command> {
        match input {
            "l" => Some(Command::Load),
            "a" => Some(Command::Add),
            "i" => Some(Command::Inspect),
            "d" => Some(Command::Delete),
            "s" => Some(Command::Save),
            "x" => Some(Command::Exit),
            _ => None,
        }
    }
}

/// Interactive menu loop over the inventory. Owns the collection and the
/// data-file path; every operation blocks on console input.
pub struct Cli<R> {
    inventory: Inventory,
    data_path: PathBuf,
    input: R,
}

impl Cli<io::StdinLock<'static>> {
    pub fn new(data_path: PathBuf) -> Self {
        Cli::with_input(data_path, io::stdin().lock())
    }
}

impl<R: BufRead> Cli<R> {
    pub fn with_input(data_path: PathBuf, input: R) -> Self {
        Self {
            inventory: Inventory::new(),
            data_path,
            input,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Picks up the saved inventory if one exists, then runs the menu loop
    /// until the user exits. Exiting never saves implicitly.
    pub fn run(&mut self) -> io::Result<()> {
        self.load_on_startup();

        loop {
            display::print_menu();
            match self.menu_choice()? {
                Command::Exit => break,
                Command::Load => self.reload_from_file()?,
                Command::Add => self.add_record()?,
                Command::Inspect => display::show_inventory(&self.inventory),
                Command::Delete => self.delete_record()?,
                Command::Save => self.save_to_file()?,
            }
        }
        Ok(())
    }

    fn load_on_startup(&mut self) {
        match persistence::load(&self.data_path) {
            Ok(loaded) => self.inventory = loaded,
            Err(PersistenceError::FileNotFound(_)) => {
                println!(
                    "No saved inventory at {} yet, starting empty.",
                    self.data_path.display()
                );
            }
            Err(err) => println!("Could not read the saved inventory: {}", err),
        }
    }

    /// Reads menu input until it parses as one of the known commands.
    fn menu_choice(&mut self) -> io::Result<Command> {
        loop {
            let line = self.prompt("Choose an operation [l, a, i, d, s, x]: ")?;
            match Command::parse(&line.to_lowercase()) {
                Some(command) => return Ok(command),
                None => println!("That is not one of the options, choose from l, a, i, d, s or x."),
            }
        }
    }

    fn reload_from_file(&mut self) -> io::Result<()> {
        println!("WARNING: reloading replaces all unsaved inventory changes.");
        let answer = self.prompt("Type 'yes' to reload from file, anything else cancels: ")?;
        if answer.eq_ignore_ascii_case("yes") {
            match persistence::load(&self.data_path) {
                Ok(loaded) => {
                    self.inventory = loaded;
                    println!("Inventory reloaded from {}.", self.data_path.display());
                }
                // A failed load leaves the in-memory inventory untouched.
                Err(err) => println!("Reload failed: {}", err),
            }
        } else {
            self.pause("Reload canceled. Press [ENTER] to return to the menu.")?;
        }
        display::show_inventory(&self.inventory);
        Ok(())
    }

    fn add_record(&mut self) -> io::Result<()> {
        let id = self.prompt_id("Enter a numeric ID for the new CD: ")?;
        let title = self.prompt("What is the CD's title? ")?;
        let artist = self.prompt("Who is the artist? ")?;
        self.inventory.add(CdRecord::new(id, &title, &artist));
        display::show_inventory(&self.inventory);
        Ok(())
    }

    fn delete_record(&mut self) -> io::Result<()> {
        display::show_inventory(&self.inventory);
        let id = self.prompt_id("Which ID would you like to delete? ")?;
        if self.inventory.delete(id) {
            println!("The CD was removed.");
        } else {
            println!("Could not find a CD with that ID.");
        }
        display::show_inventory(&self.inventory);
        Ok(())
    }

    fn save_to_file(&mut self) -> io::Result<()> {
        display::show_inventory(&self.inventory);
        let answer = self.prompt("Save this inventory to file? [y/n] ")?;
        if answer.eq_ignore_ascii_case("y") {
            match persistence::save(&self.data_path, &self.inventory) {
                Ok(()) => println!("Inventory saved to {}.", self.data_path.display()),
                Err(err) => println!("Could not save the inventory: {}", err),
            }
        } else {
            self.pause("The inventory was NOT saved. Press [ENTER] to return to the menu.")?;
        }
        Ok(())
    }

    /// Reads ids until one parses, complaining in between. There is no
    /// cancel from inside this loop.
    fn prompt_id(&mut self, message: &str) -> io::Result<u64> {
        loop {
            let line = self.prompt(message)?;
            match line.parse::<u64>() {
                Ok(id) => return Ok(id),
                Err(_) => println!("That is not a numeric ID. Please try again."),
            }
        }
    }

    fn pause(&mut self, message: &str) -> io::Result<()> {
        self.prompt(message)?;
        Ok(())
    }

    fn prompt(&mut self, message: &str) -> io::Result<String> {
        print!("{}", message);
        io::stdout().flush()?;
        self.read_line()
    }

    /// One trimmed line of input. A closed input stream surfaces as an
    /// error instead of spinning the prompt loops forever.
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        Ok(line.trim().to_string())
    }
}
