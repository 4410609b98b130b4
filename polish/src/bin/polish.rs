mod repl {
    use polish::{Expression, MathContext, Notation};
    use rustyline::error::ReadlineError;
    use rustyline::DefaultEditor;

    pub fn convert_and_eval(notation: Notation, input: &str) {
        if let Err(c) = notation.check(input) {
            println!("Bad {} character: {:?}", notation, c);
            return;
        }
        let mut expr = Expression::new(input, notation);
        match expr.convert() {
            Err(e) => println!("Parse error: {}", e),
            Ok(converted) => match expr.evaluate() {
                Err(e) => println!("{} ({})", converted, e),
                Ok(result) => println!("{} = {}", converted, result),
            },
        }
    }

    // None when the user hits ctrl-c/ctrl-d
    fn ask(rl: &mut DefaultEditor, prompt: &str) -> Result<Option<String>, String> {
        match rl.readline(prompt) {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                Ok(Some(line.trim().to_string()))
            }
        }
    }

    fn ask_notation(rl: &mut DefaultEditor) -> Result<Option<Notation>, String> {
        loop {
            match ask(rl, "Enter the direction (1 for infix, 2 for postfix): ")? {
                None => return Ok(None),
                Some(line) => match line.parse::<Notation>() {
                    Ok(notation) => return Ok(Some(notation)),
                    Err(e) => println!("{}", e),
                },
            }
        }
    }

    fn ask_expression(rl: &mut DefaultEditor, notation: Notation)
        -> Result<Option<String>, String>
    {
        let prompt = expression_prompt(notation);
        loop {
            match ask(rl, &prompt)? {
                None => return Ok(None),
                Some(line) => match notation.check(&line) {
                    Ok(()) => return Ok(Some(line)),
                    Err('\0') => println!("Empty expression"),
                    Err(c) => println!("Bad {} character: {:?}", notation, c),
                },
            }
        }
    }

    pub fn expression_prompt(notation: Notation) -> String {
        match notation {
            Notation::Infix => format!("Enter an infix expression: "),
            Notation::Postfix => format!("Enter a postfix expression: "),
        }
    }

    // parse 'x=4' style bindings
    fn parse_binding(line: &str) -> Option<(char, f64)> {
        let (var, val) = line.split_once('=')?;
        let mut chars = var.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(v), None) if v.is_ascii_alphabetic() => {
                val.trim().parse::<f64>().ok().map(|val| (v, val))
            }
            _ => None,
        }
    }

    fn print_menu(notation: Notation) {
        println!("Expression Conversion Menu:");
        match notation {
            Notation::Infix => println!("1. Convert Infix to Postfix"),
            Notation::Postfix => println!("1. Convert Postfix to Infix"),
        }
        println!("2. Evaluate Expression");
        println!("3. Set Variable");
        println!("4. Quit");
    }

    pub fn session(rl: &mut DefaultEditor) -> Result<(), String> {
        println!("Welcome to the Expression Converter and Evaluator!");
        let notation = match ask_notation(rl)? {
            Some(notation) => notation,
            None => return Ok(()),
        };
        let input = match ask_expression(rl, notation)? {
            Some(input) => input,
            None => return Ok(()),
        };
        let mut expr = Expression::new(&input, notation);
        let mut cx = MathContext::new();
        loop {
            print_menu(notation);
            let choice = match ask(rl, "Enter your choice (1-4): ")? {
                Some(choice) => choice,
                None => return Ok(()),
            };
            match choice.as_str() {
                "1" => match (expr.convert(), notation) {
                    (Err(e), _) => println!("Parse error: {}", e),
                    (Ok(postfix), Notation::Infix) => println!("Postfix expression: {}", postfix),
                    (Ok(infix), Notation::Postfix) => println!("Infix expression: {}", infix),
                },
                "2" => match expr.eval_with(&cx) {
                    Err(e) => println!("{}", e),
                    Ok(result) => println!("Result: {}", result),
                },
                "3" => match ask(rl, "Variable (eg: x=4): ")? {
                    None => return Ok(()),
                    Some(line) => match parse_binding(&line) {
                        Some((var, val)) => cx.setvar(var, val),
                        None => println!("Bad binding: {}", line),
                    },
                },
                "4" => {
                    println!("Exiting program.");
                    return Ok(());
                }
                _ => println!("Invalid choice. Please enter a number between 1 and 4."),
            }
        }
    }
}

const USAGE: &str = "usage: polish [<infix|postfix> <expr>...]";

// None means no expression was given and the interactive session should run
fn one_shot(args: &[String]) -> Result<Option<(polish::Notation, String)>, String> {
    match args.len() {
        0 | 1 => Ok(None),
        2 => Err(USAGE.to_string()),
        _ => {
            let notation = args[1].parse::<polish::Notation>().map_err(|e| format!("{}\n{}", e, USAGE))?;
            Ok(Some((notation, args[2..].join(" "))))
        }
    }
}

fn main() -> Result<(), String> {
    let args = std::env::args().collect::<Vec<String>>();
    match one_shot(&args) {
        Err(usage) => {
            println!("{}", usage);
            return Ok(());
        }
        Ok(Some((notation, input))) => {
            repl::convert_and_eval(notation, &input[..]);
            return Ok(());
        }
        Ok(None) => (),
    }

    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    let histpath = dirs::home_dir().map(|h| h.join(".polish_history"));
    if let Some(ref path) = histpath {
        if rl.load_history(path).is_err() {
            println!("No history yet");
        }
    }
    repl::session(&mut rl)?;
    if let Some(ref path) = histpath {
        rl.save_history(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}
