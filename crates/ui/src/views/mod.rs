mod intake;

pub use intake::IntakeView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
