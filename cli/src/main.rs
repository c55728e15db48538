#![allow(clippy::print_stdout, clippy::print_stderr)]
use crate::cli::{Args, Command};
use anyhow::Context;
use clap::Parser;
use sparql_cell::{highlight_document, CellHost, CellRunner, HostError, ResultTable};
use std::fs::{self, File};
use std::io::{stdin, stdout, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

mod cli;

fn main() -> anyhow::Result<()> {
    let matches = Args::parse();
    match matches.command {
        Command::Run {
            file,
            args,
            endpoint,
            out,
            bind_dir,
        } => {
            let cell = read_cell(file.as_deref())?;
            let (line, body) = split_directive(&cell, &args);
            let runner = CellRunner::new(endpoint);
            let mut host = FileHost::new(open_output(out.as_deref())?, bind_dir);
            runner.run(line, body, &mut host)?;
            host.flush()
        }
        Command::Highlight { file, out } => {
            let cell = read_cell(file.as_deref())?;
            let (_, body) = split_directive(&cell, "");
            let mut output = open_output(out.as_deref())?;
            output.write_all(highlight_document(body.trim()).as_bytes())?;
            Ok(output.flush()?)
        }
    }
}

fn read_cell(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read cell file {}", path.display())),
        None => {
            let mut cell = String::new();
            stdin().lock().read_to_string(&mut cell)?;
            Ok(cell)
        }
    }
}

/// Splits an optional `%%sparql [varname] [endpoint]` header line off the
/// cell. Without the header the whole input is the body and `fallback` is
/// the directive line.
fn split_directive<'a>(cell: &'a str, fallback: &'a str) -> (&'a str, &'a str) {
    let mut lines = cell.splitn(2, '\n');
    let first = lines.next().unwrap_or_default();
    if let Some(directive) = first.trim().strip_prefix("%%sparql") {
        (directive.trim(), lines.next().unwrap_or_default())
    } else {
        (fallback, cell)
    }
}

fn open_output(path: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(stdout().lock()),
    })
}

/// Host environment backed by the local filesystem: the HTML output stream
/// is a writer, bound tables are materialized as `<name>.csv` files.
struct FileHost {
    output: Box<dyn Write>,
    bind_dir: PathBuf,
}

impl FileHost {
    fn new(output: Box<dyn Write>, bind_dir: PathBuf) -> Self {
        FileHost { output, bind_dir }
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        Ok(self.output.flush()?)
    }
}

impl CellHost for FileHost {
    fn display_html(&mut self, html: &str) -> Result<(), HostError> {
        self.output.write_all(html.as_bytes())?;
        self.output.write_all(b"\n")?;
        self.output.flush()?;
        Ok(())
    }

    fn bind(&mut self, name: &str, table: &ResultTable) -> Result<(), HostError> {
        fs::create_dir_all(&self.bind_dir)?;
        let path = self.bind_dir.join(format!("{name}.csv"));
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(table.columns())?;
        for row in table.rows() {
            writer.write_record(row.iter().map(|cell| cell.as_deref().unwrap_or_default()))?;
        }
        writer.flush()?;
        Ok(())
    }
}
