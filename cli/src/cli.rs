use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "sparql-cell")]
/// SPARQL notebook-cell runner
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a cell: highlight the query, execute it, render the result table
    Run {
        /// File containing the cell
        ///
        /// If no file is given, stdin is read.
        ///
        /// A first line starting with `%%sparql` carries the directive, e.g.
        /// `%%sparql df https://dbpedia.org/sparql`; the rest of the file is
        /// the query body.
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        /// Directive line (`[varname] [endpoint]`), used when the cell has no
        /// `%%sparql` header
        #[arg(long, default_value = "")]
        args: String,
        /// Default endpoint, used when the directive does not name one
        #[arg(long, default_value = sparql_cell::DEFAULT_ENDPOINT, value_hint = ValueHint::Url)]
        endpoint: String,
        /// File the HTML output is written to
        ///
        /// If no file is given, stdout is written.
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        out: Option<PathBuf>,
        /// Directory a bound table is materialized into, as `<varname>.csv`
        #[arg(long, default_value = ".", value_hint = ValueHint::DirPath)]
        bind_dir: PathBuf,
    },
    /// Highlight a query as HTML without executing it
    Highlight {
        /// File containing the query
        ///
        /// If no file is given, stdin is read. A `%%sparql` header line is
        /// skipped if present.
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        /// File the HTML output is written to
        ///
        /// If no file is given, stdout is written.
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        out: Option<PathBuf>,
    },
}
