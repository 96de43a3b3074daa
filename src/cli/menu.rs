use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Result;

use super::table::TextTable;
use crate::data::model::{CameraRecord, NumericColumn};
use crate::data::store::CameraStore;
use crate::error::CameraError;
use crate::state::{ChartChoice, Choice, MenuState};
use crate::ui::ChartRenderer;

// ---------------------------------------------------------------------------
// Menu – the interactive loop
// ---------------------------------------------------------------------------

/// Drives the text menu over any line-oriented input and output.
///
/// The loop owns the store for the whole session. Malformed numeric input
/// and end of input end the session with an error; an unknown menu answer
/// is reported and the menu is shown again.
pub struct Menu<R, W, C> {
    store: CameraStore,
    input: R,
    output: W,
    charts: C,
}

impl<R: BufRead, W: Write, C: ChartRenderer> Menu<R, W, C> {
    pub fn new(store: CameraStore, input: R, output: W, charts: C) -> Self {
        Menu {
            store,
            input,
            output,
            charts,
        }
    }

    /// Give back the store, output and chart backend.
    #[cfg(test)]
    pub fn into_parts(self) -> (CameraStore, W, C) {
        (self.store, self.output, self.charts)
    }

    /// Run until the user picks Exit.
    pub fn run(&mut self) -> Result<()> {
        let mut state = MenuState::MenuDisplayed;
        while state != MenuState::Exited {
            state = self.step(state)?;
        }
        Ok(())
    }

    /// Advance the state machine by one transition.
    pub fn step(&mut self, state: MenuState) -> Result<MenuState> {
        match state {
            MenuState::MenuDisplayed => {
                self.display_menu()?;
                Ok(MenuState::AwaitingChoice)
            }
            MenuState::AwaitingChoice => {
                let answer = self.prompt("Enter your choice (1-8): ")?;
                match Choice::parse(answer.trim()) {
                    Some(choice) => Ok(MenuState::Executing(choice)),
                    None => {
                        log::warn!("Unknown menu choice {answer:?}");
                        writeln!(
                            self.output,
                            "Invalid choice. Please enter a number between 1 and 8."
                        )?;
                        Ok(MenuState::MenuDisplayed)
                    }
                }
            }
            MenuState::Executing(choice) => self.execute(choice),
            MenuState::Exited => Ok(MenuState::Exited),
        }
    }

    fn display_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Camera Dataset CLI ---")?;
        for (i, choice) in Choice::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, choice.label())?;
        }
        Ok(())
    }

    fn execute(&mut self, choice: Choice) -> Result<MenuState> {
        log::debug!("Executing {choice:?}");
        match choice {
            Choice::Summary => {
                writeln!(self.output, "\n--- Dataset Summary ---")?;
                let table = TextTable::of_summary(&self.store.summary());
                write!(self.output, "{table}")?;
            }
            Choice::FilterByYear => {
                let start = self.prompt_i32("Enter start year: ")?;
                let end = self.prompt_i32("Enter end year: ")?;
                let table = TextTable::of_records(&self.store.filter_by_year(start, end));
                writeln!(self.output, "\nFiltered Cameras ({start}-{end}):")?;
                write!(self.output, "{table}")?;
            }
            Choice::FilterByPrice => {
                let max_price = self.prompt_f64("Enter maximum price: ")?;
                let table = TextTable::of_records(&self.store.filter_by_price(max_price));
                writeln!(self.output, "\nFiltered Cameras (Price <= ${max_price:?}):")?;
                write!(self.output, "{table}")?;
            }
            Choice::AddCamera => {
                writeln!(self.output, "\n--- Add a New Camera ---")?;
                let record = self.prompt_record()?;
                self.store.add_record(record);
                writeln!(self.output, "New camera added successfully!")?;
            }
            Choice::RetrieveDetails => {
                let model = self.prompt("Enter the camera model name to retrieve: ")?;
                let table = TextTable::of_records(&self.store.retrieve_by_model(&model));
                writeln!(self.output, "\nDetails of {model}:")?;
                write!(self.output, "{table}")?;
            }
            Choice::UpdatePrice => {
                let model = self.prompt("Enter the camera model name to update: ")?;
                let new_price = self.prompt_f64("Enter the new price: ")?;
                self.store.update_price(&model, new_price);
                writeln!(self.output, "Updated the price of {model} successfully!")?;
            }
            Choice::Visualize => self.visualize()?,
            Choice::Exit => {
                writeln!(self.output, "Exiting the CLI. Goodbye!")?;
                return Ok(MenuState::Exited);
            }
        }
        Ok(MenuState::MenuDisplayed)
    }

    fn visualize(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Visualization Options ---")?;
        writeln!(self.output, "1. Price Distribution")?;
        writeln!(self.output, "2. Max Resolution vs Price")?;
        let answer = self.prompt("Enter your choice (1-2): ")?;

        let rendered = match ChartChoice::parse(answer.trim()) {
            Some(ChartChoice::PriceDistribution) => {
                self.charts.price_distribution(self.store.dataset())
            }
            Some(ChartChoice::ResolutionVsPrice) => {
                self.charts.resolution_vs_price(self.store.dataset())
            }
            None => {
                log::warn!("Unknown visualization choice {answer:?}");
                writeln!(self.output, "Invalid choice.")?;
                return Ok(());
            }
        };

        if let Err(e) = rendered {
            log::error!("Chart failed: {e:#}");
            writeln!(self.output, "Could not display chart: {e:#}")?;
        }
        Ok(())
    }

    // -- Prompts --

    /// Print `message`, then read one line without its line terminator.
    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CameraError::EndOfInput.into());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn prompt_i32(&mut self, message: &str) -> Result<i32> {
        let answer = self.prompt(message)?;
        parse_answer(answer, "integer")
    }

    fn prompt_f64(&mut self, message: &str) -> Result<f64> {
        let answer = self.prompt(message)?;
        parse_answer(answer, "number")
    }

    /// Ask for the model, then every numeric column in schema order.
    fn prompt_record(&mut self) -> Result<CameraRecord> {
        let model = self.prompt("Enter Model: ")?;
        let mut record = CameraRecord::new(model);
        for col in NumericColumn::ALL {
            let message = format!("Enter {}: ", col.label());
            let value = if col.is_integer() {
                f64::from(self.prompt_i32(&message)?)
            } else {
                self.prompt_f64(&message)?
            };
            col.set(&mut record, value);
        }
        Ok(record)
    }
}

fn parse_answer<T: FromStr>(answer: String, expected: &'static str) -> Result<T> {
    let parsed = answer.trim().parse::<T>();
    match parsed {
        Ok(value) => Ok(value),
        Err(_) => Err(CameraError::InvalidInput {
            value: answer,
            expected,
        }
        .into()),
    }
}
