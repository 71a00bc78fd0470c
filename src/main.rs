//! CLI tool that tokenizes a VCL source file and prints one line
//! per token.

use std::process::ExitCode;

use vcl_lexer::SourceFile;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map_or("vcl-lexer", String::as_str);

    let Some(path) = args.get(1) else {
        println!("Usage: {program} <source.vcl>");
        println!("No source file is provided.");
        return ExitCode::from(1);
    };

    let source = match SourceFile::open(path) {
        Ok(source) => source,
        Err(_) => {
            println!("Usage: {program} <source.vcl>");
            println!("Source file {path} may not exist.");
            return ExitCode::from(1);
        }
    };

    let mut lexer = source.lexer();
    loop {
        match lexer.next_token() {
            Ok(Some(token)) => println!("{token}"),
            Ok(None) => return ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::from(1);
            }
        }
    }
}
