//! Field labels shared by several resources

use super::Tr;

pub const TITLE: Tr = Tr::new("Sözbaşy", "Title", "Заголовок");
pub const DESCRIPTION: Tr = Tr::new("Beýany", "Description", "Описание");
pub const IMAGE: Tr = Tr::new("Surat", "Image", "Изображение");
pub const NAME: Tr = Tr::new("Ady", "Name", "Имя");
pub const AUTHOR: Tr = Tr::new("Awtor", "Author", "Автор");
pub const REVIEW: Tr = Tr::new("Teswir", "Review", "Отзыв");
pub const QUESTION: Tr = Tr::new("Sorag", "Question", "Вопрос");
pub const ANSWER: Tr = Tr::new("Jogap", "Answer", "Ответ");
pub const TOUR: Tr = Tr::new("Tur", "Tour", "Тур");
pub const BLOG: Tr = Tr::new("Blog", "Blog", "Блог");
pub const CAREER: Tr = Tr::new("Iş orny", "Vacancy", "Вакансия");
pub const REQUIREMENT: Tr = Tr::new("Talap", "Requirement", "Требование");
pub const ITEM: Tr = Tr::new("Bölüm", "Item", "Пункт");
pub const ADDRESS: Tr = Tr::new("Salgy", "Address", "Адрес");
pub const MAP: Tr = Tr::new("Karta", "Map", "Карта");
pub const EMAIL: Tr = Tr::new("E-poçta", "Email", "Эл. почта");
pub const PHONE: Tr = Tr::new("Telefon", "Phone", "Телефон");
pub const CV: Tr = Tr::new("Rezýume", "CV", "Резюме");
pub const CREATED_AT: Tr = Tr::new("Döredilen wagty", "Received", "Получено");
