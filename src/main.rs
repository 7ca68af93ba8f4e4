use pcyk::{demo, Err, ParseError};

fn main() -> Result<(), Err> {
    let g = demo::grammar()?;

    println!("<<<<<<TEST INPUT>>>>>>\n");
    for sentence in demo::SENTENCES {
        println!("--------------------------------");
        println!("{}\n", sentence);

        match g.parse_sentence(sentence) {
            Ok(parse) => {
                print!("{}", parse.tree().to_outline());
                println!("Probability = {}\n", parse.probability());
            }
            Err(err @ ParseError::LexicalGap { .. }) => println!("{}\n", err),
            Err(ParseError::NoDerivation(_)) => println!("This sentence cannot be parsed\n"),
        }
        println!("--------------------------------");
    }

    Ok(())
}
