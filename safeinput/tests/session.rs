//! End-to-end sessions over scripted input.

use safeinput::utils::{DesiredType, Sanitize, Terminal, TerminalError, centered_header};

fn run<T>(
    input: &str,
    f: impl FnOnce(&mut Terminal<&[u8], Vec<u8>>) -> Result<T, TerminalError>,
) -> (Result<T, TerminalError>, String) {
    let mut terminal = Terminal::new(input.as_bytes(), Vec::new());
    let result = f(&mut terminal);
    let (_, output) = terminal.into_parts();
    (result, String::from_utf8(output).unwrap())
}

/// "abc" then "5" for an age prompt.
#[test]
fn test_read_int_recovers_after_bad_token() {
    let (age, out) = run("abc\n5\n", |t| t.read_int("Enter your age"));

    assert_eq!(age.unwrap(), 5);
    assert_eq!(
        out,
        "Enter your age: Invalid input. Please enter an integer.\nEnter your age: "
    );
}

/// "15" then "3" for a 1..=10 prompt.
#[test]
fn test_read_ranged_int_recovers_after_out_of_range() {
    let (value, out) = run("15\n3\n", |t| t.read_ranged_int("Pick one", 1, 10));

    assert_eq!(value.unwrap(), 3);
    assert_eq!(out.matches("Input out of range.").count(), 1);
    assert!(!out.contains("Invalid input."));
}

#[test]
fn test_read_ranged_int_accepts_every_value_in_range() {
    for v in -3..=3 {
        let (value, out) = run(&format!("{}\n", v), |t| t.read_ranged_int("N", -3, 3));
        assert_eq!(value.unwrap(), v);
        assert_eq!(out, "N [-3 - 3]: ");
    }
}

#[test]
fn test_read_ranged_int_rejects_values_outside_range() {
    for v in [i32::MIN, -4, 4, i32::MAX] {
        let (value, out) = run(&format!("{}\n", v), |t| t.read_ranged_int("N", -3, 3));
        assert!(value.unwrap_err().is_exhausted());
        assert_eq!(
            out,
            "N [-3 - 3]: Input out of range. Please enter an integer between -3 and 3.\nN [-3 - 3]: "
        );
    }
}

#[test]
fn test_one_diagnostic_per_malformed_token() {
    let bad = ["x", "1.5", "2147483648", "--1", "five"];
    let input = format!("{}\n42\n", bad.join("\n"));
    let (value, out) = run(&input, |t| t.read_int("Number"));

    assert_eq!(value.unwrap(), 42);
    assert_eq!(
        out.matches("Invalid input. Please enter an integer.").count(),
        bad.len()
    );
}

#[test]
fn test_sequential_reads_are_independent() {
    let (values, _) = run("3\n4\n", |t| {
        let first = t.read_int("First")?;
        let second = t.read_int("Second")?;
        Ok((first, second))
    });

    assert_eq!(values.unwrap(), (3, 4));
}

#[test]
fn test_demonstration_session() {
    let input = [
        "",
        "Ada",
        "forty",
        "36",
        "100000.50",
        "11",
        "7",
        "0.1",
        "2.5",
        "maybe",
        "y",
        "Hello123",
        "Hello",
        "Lovelace",
        "13",
        "2.75",
        "123-456-789",
        "123-45-6789",
        "M1234",
        "m12345",
        "Open",
        "o",
    ]
    .join("\n")
        + "\n";

    let (result, out) = run(&input, |t| {
        let first = t.read_non_empty_line("Enter your first name")?;
        let age = t.read_int("Enter your age")?;
        let salary = t.read_double("Enter your salary")?;
        let ranged = t.read_ranged_int("Enter an integer between 1 and 10", 1, 10)?;
        let ranged_double = t.read_ranged_double("Enter a double between 0.5 and 5.5", 0.5, 5.5)?;
        let go_on = t.read_yes_no("Do you want to continue?")?;
        let word = t.read_matching_string(
            "Enter a string that matches the pattern [A-Za-z]+",
            "[A-Za-z]+",
        )?;
        let last = t.read_non_empty_line("Enter your last name")?;
        let fav_int = t.read_int("Enter your favorite integer")?;
        let fav_double = t.read_double("Enter your favorite double")?;
        let ssn = t.read_matching_string("Enter your SSN (XXX-XX-XXXX)", r"^\d{3}-\d{2}-\d{4}$")?;
        let m_number = t.read_matching_string("Enter your UC Student M Number", r"^(M|m)\d{5}$")?;
        let menu = t.read_matching_string(
            "Enter your menu choice (Open, Save, View, Quit)",
            "^[OoSsVvQq]$",
        )?;
        t.print_centered_header("Message Centered Here")?;

        Ok((
            first,
            age,
            salary,
            ranged,
            ranged_double,
            go_on,
            word,
            last,
            fav_int,
            fav_double,
            ssn,
            m_number,
            menu,
        ))
    });

    let (first, age, salary, ranged, ranged_double, go_on, word, last, fav_int, fav_double, ssn, m_number, menu) =
        result.unwrap();
    assert_eq!(first, "Ada");
    assert_eq!(age, 36);
    assert_eq!(salary, 100000.50);
    assert_eq!(ranged, 7);
    assert_eq!(ranged_double, 2.5);
    assert!(go_on);
    assert_eq!(word, "Hello");
    assert_eq!(last, "Lovelace");
    assert_eq!(fav_int, 13);
    assert_eq!(fav_double, 2.75);
    assert_eq!(ssn, "123-45-6789");
    assert_eq!(m_number, "m12345");
    assert_eq!(menu, "o");

    assert_eq!(out.matches("Invalid input. Please enter an integer.").count(), 1);
    assert_eq!(out.matches("Input out of range.").count(), 2);
    assert_eq!(out.matches("Invalid input. Please enter Y or N.").count(), 1);
    assert_eq!(out.matches("Invalid input. Please match the pattern:").count(), 4);
    assert!(out.ends_with(&centered_header("Message Centered Here")));
}

#[test]
fn test_ask_custom_filters() {
    let (answer, out) = run("\n0\n2\n", |t| {
        t.ask(
            "Workers",
            &[
                Sanitize::NonEmpty,
                Sanitize::IsType(DesiredType::Integer),
                Sanitize::IsBetween(1, 4),
            ],
        )
    });

    assert_eq!(answer.unwrap(), "2");
    assert_eq!(
        out,
        "Workers: Workers: Input out of range. Please enter an integer between 1 and 4.\nWorkers: "
    );
}

#[test]
fn test_exhaustion_is_reported_to_caller() {
    let (result, out) = run("no\nnope\n", |t| t.read_yes_no("Continue?"));

    assert!(matches!(result, Err(TerminalError::Exhausted)));
    assert_eq!(out.matches("Invalid input. Please enter Y or N.").count(), 2);
}
