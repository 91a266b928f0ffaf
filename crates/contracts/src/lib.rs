//! Общие типы данных панели администратора: записи клиентов, товаров и заказов,
//! параметры списков и DTO сводной статистики.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
