use std::{env, path::PathBuf};

use jsxscan::{display_error, read_source, report::format_report, scanner::scanner::scan};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path = PathBuf::from(&args[1]);
    let source = read_source(&file_path);

    if source.is_err() {
        display_error(source.err().unwrap());
        panic!()
    }

    let result = scan(&source.unwrap());

    for line in format_report(&result) {
        println!("{}", line);
    }
}
