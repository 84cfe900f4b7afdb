use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpenWeatherError {
    #[error("fetch failure: {0}")]
    FetchFailure(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
impl From<serde_json::Error> for OpenWeatherError {
    fn from(e: serde_json::Error) -> OpenWeatherError {
        OpenWeatherError::MalformedResponse(format!("json document error: {}", e))
    }
}
impl From<ureq::Error> for OpenWeatherError {
    fn from(e: ureq::Error) -> OpenWeatherError {
        match e {
            ureq::Error::StatusCode(code) => OpenWeatherError::FetchFailure(format!("http status {}", code)),
            e => OpenWeatherError::FetchFailure(format!("http request error: {}", e)),
        }
    }
}
