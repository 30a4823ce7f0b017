mod quiz;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
#[cfg(test)]
mod intent_smoke;

pub use quiz::QuizView;
