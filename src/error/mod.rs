mod kit;
mod temperature;

pub use kit::KitError;
pub use temperature::TemperatureError;

pub trait IsRetryable {
    fn is_retryable(&self) -> bool;
}
