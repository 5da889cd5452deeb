// Copyright 2026 The Synt Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::io;
use std::result::Result as StdResult;

use pico_args::Arguments;

use synt_engine::recognize;

const VERSION: &str = "1.0";
const EXIT_FAILURE: i32 = 1;

macro_rules! die(
    ($($arg:tt)*) => {{
        eprintln!($($arg)*);
        std::process::exit(EXIT_FAILURE)
    }}
);

fn usage() -> ! {
    let argv0 = std::env::args()
        .next()
        .unwrap_or_else(|| "synt".to_string());
    die!(
        concat!(
            "synt {}: Check a line of the small statement language.\n\
         \n\
         USAGE:\n",
            "    {} [OPTION...] [LINE]\n",
            "\n\
         OPTIONS:\n",
            "    -h, --help       show this message\n",
            "\n\
         When LINE is not given, a single line is read from stdin.\n",
            "Prints \"Accepted.\" or \"Rejected.\"; a rejected line exits non-zero.\n",
        ),
        VERSION,
        argv0
    );
}

#[derive(Clone, Default, Debug)]
struct Args {
    line: Option<String>,
}

fn parse_args() -> StdResult<Args, Box<dyn std::error::Error>> {
    let mut parsed = Arguments::from_env();
    if parsed.contains(["-h", "--help"]) {
        usage();
    }

    let mut args: Args = Default::default();

    let free_arguments = parsed.finish();
    if free_arguments.len() > 1 {
        eprintln!("error: expected at most one input line");
        usage();
    }

    if let Some(arg) = free_arguments.first() {
        match arg.to_str() {
            Some(line) => args.line = Some(line.to_owned()),
            None => {
                eprintln!("error: input line is not valid UTF-8");
                usage();
            }
        }
    }

    Ok(args)
}

fn read_line_from_stdin() -> String {
    let mut line = String::new();
    if let Err(err) = io::stdin().read_line(&mut line) {
        die!("error: reading stdin: {}", err);
    }
    line
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("error: {}", err);
            usage();
        }
    };

    let line = args.line.unwrap_or_else(read_line_from_stdin);

    if recognize(&line).is_ok() {
        println!("Accepted.");
    } else {
        println!("Rejected.");
        std::process::exit(EXIT_FAILURE);
    }
}
