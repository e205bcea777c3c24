use std::{env, fs::read_to_string, process};

use interpreter::{
    evaluator::evaluator::eval_program, lexer::lexer::tokenize, parser::parser::parse,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage:\n interpreter <file_to_eval.let>");
        process::exit(1);
    }

    let source = read_to_string(&args[1]).unwrap_or_else(|err| {
        eprintln!("Failed to read {}: {}", args[1], err);
        process::exit(1);
    });

    let tokens = tokenize(source);

    println!("Token Queue:");
    for token in &tokens {
        println!("{}", token);
    }

    let (root, errors) = parse(tokens);

    if !errors.is_empty() {
        for error in &errors {
            eprintln!("Parse Error: {}", error);
        }
        process::exit(1);
    }

    let root = match root {
        Some(root) => root,
        None => {
            eprintln!("Parse Error: no expression found");
            process::exit(1);
        }
    };

    println!("\nExpression: {}", root);

    match eval_program(&root) {
        Ok(result) => println!("\nExpression Result: {}", result),
        Err(error) => {
            eprintln!("Eval Error: {}", error);
            process::exit(1);
        }
    }
}
