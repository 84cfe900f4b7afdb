use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct City {
    pub name: String,
    pub country: String,
}

#[derive(Deserialize, Debug)]
pub struct Weather {
    pub main: String,
}

#[derive(Deserialize, Debug)]
pub struct MainValues {
    pub temp: f64,
    pub humidity: u8,
}

#[derive(Deserialize, Debug)]
pub struct Precipitation {
    #[serde(rename = "3h")]
    pub three_hours: Option<f64>,
}

#[derive(Deserialize, Debug)]
pub struct ListEntry {
    pub dt_txt: String,
    pub weather: Vec<Weather>,
    pub main: MainValues,
    pub rain: Option<Precipitation>,
    pub snow: Option<Precipitation>,
}

/// The 5 day / 3 hour forecast document, only the parts that are used
#[derive(Deserialize, Debug)]
pub struct FullForecast {
    pub city: City,
    pub list: Vec<ListEntry>,
}
