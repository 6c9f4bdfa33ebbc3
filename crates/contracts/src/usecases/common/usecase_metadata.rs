/// Метаданные UseCase для идентификации и документирования
pub trait UseCaseMetadata {
    /// Индекс UseCase (например, "u501")
    fn usecase_index() -> &'static str;

    /// Техническое имя (например, "historical_data_import")
    fn usecase_name() -> &'static str;

    /// Заголовок раздела в интерфейсе
    fn display_name() -> &'static str;

    /// Пояснительный текст под заголовком
    fn description() -> &'static str {
        ""
    }

    /// Полное имя вида "u501_historical_data_import"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
