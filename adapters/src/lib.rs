pub mod incoming;
pub mod outgoing;
pub mod shared;

#[cfg(test)]
mod test_support;
