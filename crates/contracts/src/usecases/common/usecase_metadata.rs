/// Метаданные сценария (страницы-операции, не привязанной к одному датасету)
pub trait UseCaseMetadata {
    /// Индекс сценария (например, "u502")
    fn usecase_index() -> &'static str;

    /// Техническое имя (например, "schedule_meeting")
    fn usecase_name() -> &'static str;

    /// Заголовок страницы
    fn display_name() -> &'static str;

    /// Полное имя вида "u502_schedule_meeting", используется как id страницы
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
