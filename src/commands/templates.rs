//! Fixed reply texts.

use teloxide::utils::html;

use super::types::BotCommand;

pub const GREETING: &str = "Привет! Я бот Mobot.";

pub const ABOUT: &str = "Я бот Mobot, созданный для помощи владельцам сайтов в премодерации отзывов.\n\
                         Моя цель - упростить процесс проверки и публикации отзывов.";

pub const CAPABILITIES: &str = "Возможности бота:\n\
                                - Просмотр отзывов по очереди\n\
                                - Вынесение вердикта по каждому отзыву\n\
                                - Разрешение публикации отзыва\n\
                                - Удаление отзыва\n\
                                - Отправка отзыва администратору\n\
                                - Отложение отзыва в конец очереди";

pub const FAQ: &str = "Часто задаваемые вопросы:\n\
                       1. Что такое премодерация отзывов?\n   \
                       Ответ: Это процесс проверки отзывов перед публикацией.\n\
                       2. Какие действия можно предпринять с отзывом?\n   \
                       Ответ: Можно разрешить публикацию, удалить, отправить администратору или отложить.\n\
                       3. Как работает отложение отзыва?\n   \
                       Ответ: Отзыв перемещается в конец очереди для последующей обработки.";

pub const PONG: &str = "Pong!";

/// Trailing text of every analysis reply.
pub const DISCLAIMER: &str = "⚠️ Не является окончательным вердиктом. \
                              Примите самостоятельное решение после прочтения текста.";

/// Reply to an analysis keyword without a message number.
pub const ANALYSIS_PROMPT: &str = "Укажите номер сообщения для анализа.";

/// Builds the command list from the command table.
pub fn help() -> String {
    let mut text = String::from("Доступные команды:");
    for cmd in BotCommand::ALL {
        text.push('\n');
        text.push_str(&format!("{cmd} - {}", cmd.description()));
    }
    text
}

/// Mini-analysis placeholder for message `num`, ending with [`DISCLAIMER`].
///
/// `num` is escaped since the reply is sent in HTML mode.
pub fn mini_analysis(num: &str) -> String {
    format!(
        "<b>Мини-анализ сообщения {}</b>\n\
         1) Пригодность к публикации: [да/нет]\n\
         2) Настроение текста: [положительный/отрицательный]\n\
         3) Требуются действия: [да/нет]\n\
         {DISCLAIMER}",
        html::escape(num)
    )
}
