use crate::record::Record;

/// The catalog used by demos and tests: five novels, one of them undated.
pub fn sample_catalog() -> Vec<Record> {
    vec![
        Record::dated("1984", "Оруэлл", 1949),
        Record::dated("Мастер и Маргарита", "Булгаков", 1967),
        Record::dated("Атлант расправил плечи", "Рэнд", 1957),
        Record::new("Преступление и наказание", "Достоевский"),
        Record::dated("Собачье сердце", "Булгаков", 1925),
    ]
}
