//! Bot-side console text. These strings are part of the observable
//! behaviour of the assistant and are asserted verbatim by tests.

pub const BOT_PREFIX: &str = "Bot: ";
pub const USER_PROMPT: &str = "You: ";

pub const OPENING: &str = "Hello! I'm here to assist you.";
pub const ASK_NAME: &str = "May I have your name? ";
pub const INVALID_EMAIL: &str = "That doesn't look like a valid email. Please try again.";
pub const FAREWELL: &str = "Goodbye! Have a great day.";

pub const INFO_RESPONSE: &str = "I am a helpful assistant. I can tell you jokes or help schedule appointments. Let me know what you need!";
pub const JOKE_EMPTY: &str = "Sorry, I couldn't fetch a joke this time.";
pub const GENERATION_FAILED: &str =
    "Oops, something went wrong while generating a response. Please try again.";

pub const TASK_OFFER: &str = "Sure, I can help with appointments.";
pub const TASK_CONFIRM_QUESTION: &str = "Would you like to book an appointment now? (yes/no)";
pub const TASK_BOOKED: &str =
    "Great! I've scheduled an appointment for you. (This is a demo, so no real booking was made.)";
pub const TASK_DECLINED: &str =
    "Alright, I won't book an appointment. Let me know if you need anything else.";

pub const CLARIFY: &str =
    "I'm sorry, I didn't understand that. Could you rephrase or try a different request?";

pub const ASK_CONTINUE: &str = "Can I help you with anything else? (yes/no)";
pub const CLOSING: &str = "Alright. Thank you for chatting! Goodbye.";
pub const ENCOURAGE: &str = "Sure, I'm here to help. What else can I do for you?";

pub fn ask_email(name: &str) -> String {
    format!("Hi {name}, please provide your email address: ")
}

pub fn ready_greeting(name: &str) -> String {
    format!("Thank you, {name}! How can I assist you today?")
}

pub fn joke_prompt(name: &str) -> String {
    format!("Tell me a joke about {name}.")
}
