//! Sample scenes
//!
//! Every sample parses without diagnostics. Tests that walk all of them use [all].

use crate::scene::locales::Locale;

/// Login screen for a phone
pub const LOGIN_EN: &str = r#"Mobile page: Login
Block: Form
    Image Logo
    Header
    Input e-mail or phone number
    Input password
    Button "Sign in"
Block: Service
    Two columns
    Link to password recovery
    Link to sign up
    "2020 @vadkou"
"#;

/// Shop catalogue with a blockalign, a direction per block and a list
pub const CATALOGUE_EN: &str = r#"// shop catalogue
Widescreen page: Catalogue
Block: Navigation
    Header Shop

Blocks "Filters", "Goods" aligned in two columns
Block: Goods
    3 columns
    Image <photo>
    Header <name>
    Field <price>
    List "Categories" consists of
        Button <category>

Block: Filters
    Rows
    Field Search
    Button "Apply"
"#;

/// Short login screen
pub const LOGIN_RU: &str = "Экран: Вход
Блок: Форма
    Поле ввода логина
    Поле ввода пароля
    Кнопка «Войти»
";

/// Authorization screen with a help list
pub const AUTH_RU: &str = r#"Экран: Авторизация
Блок: Вход
    Картинка Логотип
    Заголовок
    Поле e-mail или номера телефона
    Поле ввода пароля
    Кнопка "Войти"
Блок: Сервис
    Два столбца
    Кнопка восстановления доступа
    Кнопка регистрации
    "2020 @vadkou"
Блок: Справка
    Список тем
        включает в себя
            Заголовок
            <Ссылка на статью>

// Блоки расположены по вертикали
"#;

/// All samples with the locale they are written in
pub fn all() -> Vec<(&'static str, Locale, &'static str)> {
    vec![
        ("login_en", Locale::EnUs, LOGIN_EN),
        ("catalogue_en", Locale::EnUs, CATALOGUE_EN),
        ("login_ru", Locale::RuRu, LOGIN_RU),
        ("auth_ru", Locale::RuRu, AUTH_RU),
    ]
}
