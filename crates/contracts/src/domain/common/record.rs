/// Строка табличного датасета (заказ, лид, пользователь, купон, студент, встреча).
///
/// Табличный движок видит запись только через этот трейт: ключ строки и
/// отображение "имя поля -> значение".
pub trait Record: Clone {
    // ============================================================================
    // Методы экземпляра
    // ============================================================================

    /// Стабильный идентификатор записи, уникальный в пределах списка.
    ///
    /// Используется как ключ рендера и как адрес точечных изменений строки.
    fn record_key(&self) -> String;

    /// Строковое значение поля по имени, `None` для неизвестного поля.
    fn field_value(&self, field: &str) -> Option<String>;

    // ============================================================================
    // Метаданные датасета
    // ============================================================================

    /// Индекс датасета (например, "a003")
    fn dataset_index() -> &'static str;

    /// Машинное имя датасета, используется в именах файлов экспорта
    fn dataset_name() -> &'static str;

    /// Имя списка для UI (например, "Orders")
    fn list_name() -> &'static str;
}
