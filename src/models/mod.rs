pub mod forecast;
pub mod open_weather_forecast;
pub mod summary;
