// Chart domain models

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct SeriesData {
    pub id: String,
    pub name: String,
    pub points: Vec<ChartPoint>,
}

impl SeriesData {
    pub fn from_samples(id: &str, name: &str, xs: &[f64], ys: &[f64]) -> Self {
        let points = xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| ChartPoint { x, y })
            .collect();

        Self {
            id: id.to_string(),
            name: name.to_string(),
            points,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct ChartData {
    pub id: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<SeriesData>,
}

impl ChartData {
    pub fn line(id: &str, title: &str, x_label: &str, y_label: &str, series: SeriesData) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            series: vec![series],
        }
    }
}
