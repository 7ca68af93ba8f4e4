use std::env;
use std::io;
use std::io::Write;
use std::process;

use pcyk::{demo, Err, Grammar, ParseError};
use tracing_subscriber::EnvFilter;

fn usage(prog_name: &str) -> String {
  format!(
    r"Usage: {} [options]

Parses sentences against the built-in demo grammar. Enter -1 or ctrl+d to quit.

Options:
  -h, --help      Print this message
  -c, --chart     Print the parse chart (defaults to not printing)
  -d, --demo      Parse the demo sentences before reading input
  -g, --grammar   Print the grammar before reading input

Set RUST_LOG=pcyk=debug (or trace) to log chart construction.",
    prog_name
  )
}

fn parse(g: &Grammar, sentence: &str, print_chart: bool) {
  match g.parse_sentence(sentence) {
    Ok(parse) => {
      if print_chart {
        println!("chart:\n{}", parse.chart());
      }
      print!("{}", parse.tree().to_outline());
      println!("Probability = {}\n", parse.probability());
    }
    Err(ParseError::NoDerivation(chart)) => {
      if print_chart {
        println!("chart:\n{}", chart);
      }
      println!("This sentence cannot be parsed\n");
    }
    Err(err @ ParseError::LexicalGap { .. }) => println!("{}\n", err),
  }
}

/// Lines starting with a -1 token end the session
fn wants_quit(line: &str) -> bool {
  line.split_whitespace().next() == Some("-1")
}

struct Args {
  print_chart: bool,
  run_demo: bool,
  print_grammar: bool,
}

impl Args {
  fn make_error_message(msg: &str, prog_name: impl AsRef<str>) -> String {
    format!("argument error: {}.\n\n{}", msg, usage(prog_name.as_ref()))
  }

  fn parse(v: Vec<String>) -> Result<Self, String> {
    let mut iter = v.into_iter();
    let Some(prog_name) = iter.next() else {
      return Err(Self::make_error_message("bad argument vector", "cli"));
    };

    let mut print_chart = false; // default to *not* printing the chart
    let mut run_demo = false;
    let mut print_grammar = false;

    for o in iter {
      if o == "-h" || o == "--help" {
        println!("{}", usage(&prog_name));
        process::exit(0);
      } else if o == "-c" || o == "--chart" {
        print_chart = true;
      } else if o == "-d" || o == "--demo" {
        run_demo = true;
      } else if o == "-g" || o == "--grammar" {
        print_grammar = true;
      } else {
        return Err(Self::make_error_message(
          &format!("unknown option {}", o),
          prog_name,
        ));
      }
    }

    Ok(Self {
      print_chart,
      run_demo,
      print_grammar,
    })
  }
}

fn main() -> Result<(), Err> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(io::stderr)
    .init();

  let opts = match Args::parse(env::args().collect()) {
    Ok(opts) => opts,
    Err(msg) => {
      eprintln!("{}", msg);
      process::exit(255);
    }
  };

  let g = demo::grammar()?;
  tracing::info!(categories = g.categories().len(), "loaded demo grammar");

  if opts.print_grammar {
    println!("{}", g);
  }

  if opts.run_demo {
    for sentence in demo::SENTENCES {
      println!("{}\n", sentence);
      parse(&g, sentence, opts.print_chart);
    }
  }

  let mut input = String::new();
  loop {
    print!("> ");
    io::stdout().flush()?;

    match io::stdin().read_line(&mut input) {
      Ok(_) => {
        if input.is_empty() {
          // ctrl+d
          return Ok(());
        }
        let sentence = input.trim();
        if wants_quit(sentence) {
          return Ok(());
        }
        if !sentence.is_empty() {
          parse(&g, sentence, opts.print_chart);
        }
        input.clear();
      }
      Err(error) => return Err(error.into()),
    }
  }
}
