//! # Environment Variables
//!
//! Reading process settings for the native binaries. An unset variable and a
//! malformed one are different failures: the first may fall back to a default,
//! the second never does.

use std::env;
use std::str::FromStr;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    match env::var(name) {
        Ok(val) => Ok(val),
        Err(env::VarError::NotPresent) => Err(Error::MissingEnv(name)),
        Err(env::VarError::NotUnicode(_)) => Err(Error::NotUnicode(name)),
    }
}

/// Get and parse an environment variable.
pub fn get_env_parse<T: FromStr>(name: &'static str) -> Result<T, Error> {
    let val = get_env(name)?;
    val.trim().parse::<T>().map_err(|_| Error::WrongFormat { name, value: val })
}

/// Like [`get_env`], but an unset or blank variable yields `default`.
pub fn get_env_or(name: &'static str, default: &str) -> Result<String, Error> {
    match get_env(name) {
        Ok(val) if !val.trim().is_empty() => Ok(val),
        Ok(_) | Err(Error::MissingEnv(_)) => Ok(default.to_string()),
        Err(err) => Err(err),
    }
}

/// Like [`get_env_parse`], but an unset or blank variable yields `default`.
pub fn get_env_parse_or<T: FromStr>(name: &'static str, default: T) -> Result<T, Error> {
    match get_env(name) {
        Ok(val) if val.trim().is_empty() => Ok(default),
        Ok(_) => get_env_parse(name),
        Err(Error::MissingEnv(_)) => Ok(default),
        Err(err) => Err(err),
    }
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    MissingEnv(&'static str),
    NotUnicode(&'static str),
    WrongFormat { name: &'static str, value: String },
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::MissingEnv(name) => write!(fmt, "environment variable {name} is not set"),
            Error::NotUnicode(name) => write!(fmt, "environment variable {name} is not valid unicode"),
            Error::WrongFormat { name, value } => {
                write!(fmt, "environment variable {name} has an invalid value {value:?}")
            }
        }
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
