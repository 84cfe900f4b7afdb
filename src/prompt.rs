use std::io::{BufRead, Write};
use crate::errors::InputError;
use crate::models::forecast::LocationQuery;

/// Prints the greeting
///
/// # Arguments
///
/// * 'output' - where to write
pub fn greet<W: Write>(output: &mut W) -> Result<(), InputError> {
    writeln!(output, "Hello and Welcome!")?;
    writeln!(output, "This is the weather forecast digest!")?;
    writeln!(output)?;

    Ok(())
}

/// Asks for a city and a country code and returns them as a validated query
///
/// # Arguments
///
/// * 'input' - where answers are read from
/// * 'output' - where prompts are written
pub fn ask_location<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<LocationQuery, InputError> {
    let city = ask(input, output, "Enter the city name: ")?;
    let country = ask(input, output, "Enter the country code (2 letters, e.g. FR, US, GB): ")?;

    LocationQuery::new(&city, &country)
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String, InputError> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(answer.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_city_and_country() {
        let mut input = Cursor::new("Saint-Étienne\nfr\n");
        let mut output = Vec::new();

        let query = ask_location(&mut input, &mut output).unwrap();

        assert_eq!(query.city, "Saint-Étienne");
        assert_eq!(query.country, "FR");
        let prompts = String::from_utf8(output).unwrap();
        assert!(prompts.contains("Enter the city name: "));
        assert!(prompts.contains("Enter the country code"));
    }

    #[test]
    fn empty_answers_are_rejected() {
        let mut input = Cursor::new("\nFR\n");
        let mut output = Vec::new();
        assert!(matches!(ask_location(&mut input, &mut output), Err(InputError::EmptyCity)));

        let mut input = Cursor::new("Lyon\n");
        let mut output = Vec::new();
        assert!(matches!(ask_location(&mut input, &mut output), Err(InputError::EmptyCountry)));
    }

    #[test]
    fn long_country_code_is_rejected() {
        let mut input = Cursor::new("Lyon\r\nFRA\r\n");
        let mut output = Vec::new();
        assert!(matches!(ask_location(&mut input, &mut output), Err(InputError::CountryCode(_))));
    }
}
