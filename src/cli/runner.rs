//! CLI runner

use super::commands::Cli;
use crate::decode::{Format, JsonDecoder, JsonlDecoder, RowDecoder};
use crate::engine::Inferrer;
use crate::error::{Error, Result};
use crate::hints::Hints;
use crate::loader::{self, HintsFile};
use std::fs;
use std::io::Read;
use tracing::debug;

/// Executes the CLI: build hints, decode input rows, infer, print.
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner from parsed arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the inference and print the schema to stdout
    pub fn run(&self) -> Result<()> {
        let hints = self.build_hints()?;
        let body = self.read_input()?;

        let format = Format::from(self.cli.format);
        let decoder: Box<dyn RowDecoder> = match format {
            Format::Jsonl => Box::new(JsonlDecoder::new()),
            Format::Json => Box::new(JsonDecoder::new()),
        };

        let rows = decoder.decode(&body)?;
        debug!(rows = rows.len(), ?format, "decoded input");

        let mut inferrer = Inferrer::new(hints);
        for row in &rows {
            inferrer = inferrer.infer(row);
        }

        let schema = inferrer.into_schema();
        let output = if self.cli.pretty {
            schema.to_json_pretty()
        } else {
            serde_json::to_string(&schema)?
        };

        println!("{output}");
        Ok(())
    }

    /// Merge the hints file (if any) with the hint flags. Flags extend the
    /// file's path lists; an explicit `--default-number-type` wins over the
    /// file's.
    fn build_hints(&self) -> Result<Hints> {
        let mut file = match &self.cli.hints {
            Some(path) => loader::load_hints_file(path)?,
            None => HintsFile::default(),
        };

        file.enums.extend(self.cli.enum_hints.iter().cloned());
        file.values.extend(self.cli.values_hints.iter().cloned());
        file.discriminator
            .extend(self.cli.discriminator_hints.iter().cloned());

        if let Some(num_type) = self.cli.default_number_type {
            file.default_number_type = Some(num_type);
        }

        Ok(file.into_hints())
    }

    fn read_input(&self) -> Result<String> {
        match &self.cli.input {
            Some(path) => fs::read_to_string(path).map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::file_not_found(path.display().to_string())
                } else {
                    Error::Io(e)
                }
            }),
            None => {
                let mut body = String::new();
                std::io::stdin().read_to_string(&mut body)?;
                Ok(body)
            }
        }
    }
}
