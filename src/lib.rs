pub mod buf;
pub mod error;
pub mod mutator;
pub mod tcp;

#[cfg(test)]
mod test;
