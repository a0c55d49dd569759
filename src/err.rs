use failure::{bail, Error};

/// Collapses the given results into a single one that is
/// `Ok(())` when no error was encountered.
///
/// A single error is passed through unchanged, more than one
/// are described together.
pub fn compound_result<I, O, E>(results: I) -> Result<(), Error>
where
    I: IntoIterator<Item = Result<O, E>>,
    E: Into<Error>,
{
    let mut errors: Vec<Error> = results
        .into_iter()
        .filter_map(Result::err)
        .map(Into::into)
        .collect();

    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => bail!("Multiple errors: {:?}", errors),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use failure::format_err;

    #[test]
    fn no_errors_is_ok() {
        let results: Vec<Result<(), Error>> = vec![Ok(()), Ok(())];
        assert!(compound_result(results).is_ok())
    }

    #[test]
    fn single_error_passes_through() {
        let results: Vec<Result<(), Error>> = vec![Ok(()), Err(format_err!("lamp broke"))];

        let compound = compound_result(results).unwrap_err();

        assert_eq!("lamp broke", format!("{}", compound))
    }

    #[test]
    fn multiple_errors_are_merged() {
        let results: Vec<Result<(), Error>> =
            vec![Err(format_err!("lamp broke")), Err(format_err!("buzzer too"))];

        let compound = compound_result(results).unwrap_err();

        assert!(format!("{}", compound).starts_with("Multiple errors"))
    }
}
