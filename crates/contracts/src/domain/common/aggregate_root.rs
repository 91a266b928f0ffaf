/// Трейт для корня агрегата
///
/// Любая сущность, которая хранится в коллекции (клиент, товар, заказ),
/// реализует этот трейт. Идентификаторы строковые: так они приходят из фикстуры
/// и так на них ссылаются другие сущности (слабые ссылки).
pub trait AggregateRoot {
    // ============================================================================
    // Методы экземпляра
    // ============================================================================

    /// Получить ID записи
    fn id(&self) -> &str;

    /// Получить описание/название записи (для логов и сообщений)
    fn description(&self) -> &str;

    // ============================================================================
    // Метаданные класса агрегата (статические данные)
    // ============================================================================

    /// Индекс агрегата в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции (например, "clienti")
    fn collection_name() -> &'static str;

    /// Префикс для генерируемых идентификаторов (например, "c")
    fn id_prefix() -> &'static str;

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    /// Полное имя агрегата для системы (например, "a001_clienti")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
