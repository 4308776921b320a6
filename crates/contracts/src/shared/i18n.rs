//! UI chrome strings in the three console languages.

use super::api_error::Operation;
use super::form_draft::FormError;
use crate::domain::common::Tr;

pub const CONSOLE_TITLE: Tr = Tr::new("Dolandyryş paneli", "Admin console", "Панель управления");
pub const DASHBOARD: Tr = Tr::new("Baş sahypa", "Dashboard", "Главная");
pub const NO_DATA: Tr = Tr::new("Maglumat ýok", "No data", "Нет данных");
pub const LOADING: Tr = Tr::new("Ýüklenýär...", "Loading...", "Загрузка...");
pub const NOT_FOUND: Tr = Tr::new("Sahypa tapylmady", "Page not found", "Страница не найдена");

pub const ADD: Tr = Tr::new("Goşmak", "Add", "Добавить");
pub const VIEW: Tr = Tr::new("Görmek", "View", "Просмотр");
pub const EDIT: Tr = Tr::new("Üýtgetmek", "Edit", "Редактировать");
pub const DELETE: Tr = Tr::new("Pozmak", "Delete", "Удалить");
pub const SAVE: Tr = Tr::new("Ýatda saklamak", "Save", "Сохранить");
pub const CREATE: Tr = Tr::new("Döretmek", "Create", "Создать");
pub const CANCEL: Tr = Tr::new("Ýatyrmak", "Cancel", "Отмена");
pub const BACK: Tr = Tr::new("Yza", "Back", "Назад");
pub const REFRESH: Tr = Tr::new("Täzelemek", "Refresh", "Обновить");
pub const ACTIONS: Tr = Tr::new("Hereketler", "Actions", "Действия");
pub const SAVING: Tr = Tr::new("Saklanýar...", "Saving...", "Сохранение...");
pub const DELETING: Tr = Tr::new("Pozulýar...", "Deleting...", "Удаление...");

pub const CONFIRM_DELETE_TITLE: Tr = Tr::new("Pozmagy tassyklaň", "Confirm delete", "Подтвердите удаление");
pub const CONFIRM_DELETE_TEXT: Tr = Tr::new(
    "Bu ýazgy hemişelik pozular. Dowam etmelimi?",
    "This record will be removed permanently. Continue?",
    "Запись будет удалена безвозвратно. Продолжить?",
);

pub const CURRENT_FILE: Tr = Tr::new("Häzirki faýl", "Current file", "Текущий файл");
pub const NEW_FILE: Tr = Tr::new("Täze faýl", "New file", "Новый файл");
pub const OPEN_FILE: Tr = Tr::new("Faýly açmak", "Open file", "Открыть файл");
pub const SELECT_PLACEHOLDER: Tr = Tr::new("— saýlaň —", "— select —", "— выберите —");
pub const PREVIEW: Tr = Tr::new("Deslapky görnüş", "Preview", "Предпросмотр");
pub const UNGROUPED: Tr = Tr::new("Tursyz", "Without tour", "Без тура");

pub const SIGN_IN: Tr = Tr::new("Girmek", "Sign in", "Войти");
pub const SIGN_OUT: Tr = Tr::new("Çykmak", "Sign out", "Выйти");
pub const USERNAME: Tr = Tr::new("Ulanyjy ady", "Username", "Логин");
pub const PASSWORD: Tr = Tr::new("Açar sözi", "Password", "Пароль");

pub const ERROR_LOADING: Tr = Tr::new("Ýüklemekde ýalňyşlyk", "Error loading", "Ошибка загрузки");
pub const ERROR_SAVING: Tr = Tr::new("Ýatda saklamakda ýalňyşlyk", "Error saving", "Ошибка сохранения");
pub const ERROR_DELETING: Tr = Tr::new("Pozmakda ýalňyşlyk", "Error deleting", "Ошибка удаления");
pub const ERROR_LOGIN: Tr = Tr::new(
    "Ulanyjy ady ýa-da açar sözi nädogry",
    "Wrong username or password",
    "Неверный логин или пароль",
);
pub const ERROR_REQUIRED: Tr = Tr::new(
    "Hökmany meýdanlary dolduryň",
    "Please fill in all required fields",
    "Заполните обязательные поля",
);
pub const ERROR_NUMBER: Tr = Tr::new("Nädogry san", "Invalid number", "Некорректное число");

/// Generic message shown when an API call for `op` fails.
pub fn error_for(op: Operation) -> Tr {
    match op {
        Operation::Load => ERROR_LOADING,
        Operation::Save => ERROR_SAVING,
        Operation::Delete => ERROR_DELETING,
        Operation::Login => ERROR_LOGIN,
    }
}

/// Message for a client-side form problem.
pub fn form_error(err: &FormError) -> Tr {
    match err {
        FormError::MissingField(_) => ERROR_REQUIRED,
        FormError::InvalidNumber { .. } => ERROR_NUMBER,
        FormError::Shape(_) => ERROR_SAVING,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::Lang;

    #[test]
    fn test_error_messages_per_operation() {
        assert_eq!(error_for(Operation::Load).get(Lang::En), "Error loading");
        assert_eq!(error_for(Operation::Save).get(Lang::Ru), "Ошибка сохранения");
        assert_eq!(
            form_error(&FormError::MissingField("title_tm".into())).get(Lang::En),
            "Please fill in all required fields"
        );
    }
}
