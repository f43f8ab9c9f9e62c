#[cfg(test)]
mod common;

#[cfg(test)]
mod case_fetch_tests;

#[cfg(test)]
mod case_update_tests;

#[cfg(test)]
mod role_tests;
