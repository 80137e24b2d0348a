use super::mock::{MockGameInput, MockGameOutput};
use super::terminal::TerminalOutput;
use super::*;
use crate::game::quiz::definition::QuestionBank;

#[test]
fn accepts_first_valid_value() {
    let mut input = MockGameInput::new(&["2"]);
    let output = MockGameOutput::new();
    assert_eq!(read_int_in_range(&mut input, &output, 1, 4).unwrap(), 2);
    assert!(output.flush().is_empty());
}

#[test]
fn reprompts_until_valid() {
    let mut input = MockGameInput::new(&["9", "abc", "2", "3"]);
    let output = MockGameOutput::new();
    assert_eq!(read_int_in_range(&mut input, &output, 1, 4).unwrap(), 2);
    assert_eq!(
        output.flush(),
        vec![Message::InvalidInput, Message::InvalidInput]
    );
    assert_eq!(input.remaining(), 1);
}

#[test]
fn bounds_are_inclusive() {
    let mut input = MockGameInput::new(&["0", "-1", "5", "4", "1"]);
    let output = MockGameOutput::new();
    assert_eq!(read_int_in_range(&mut input, &output, 1, 4).unwrap(), 4);
    assert_eq!(read_int_in_range(&mut input, &output, 1, 4).unwrap(), 1);
    assert_eq!(output.count_message(&Message::InvalidInput), 3);
}

#[test]
fn ignores_surrounding_whitespace() {
    let mut input = MockGameInput::new(&[" 3 \n"]);
    let output = MockGameOutput::new();
    assert_eq!(read_int_in_range(&mut input, &output, 1, 4).unwrap(), 3);
}

#[test]
fn fails_when_input_closes() {
    let mut input = MockGameInput::new(&["nope"]);
    let output = MockGameOutput::new();
    assert!(read_int_in_range(&mut input, &output, 1, 4).is_err());
    assert_eq!(output.count_message(&Message::InvalidInput), 1);
}

#[test]
fn renders_question_with_numbered_choices() {
    let bank = QuestionBank::default();
    let question = bank.all_questions()[3].clone();
    let text = TerminalOutput.interpret_message(&Message::QuestionBegins(question));
    assert_eq!(
        text,
        "\nWhat is the capital of Australia?\n1. Sydney\n2. Melbourne\n3. Canberra\n4. Perth"
    );
}

#[test]
fn renders_wrong_answer_with_choice() {
    let bank = QuestionBank::default();
    let question = bank.all_questions()[0].clone();
    let text = TerminalOutput.interpret_message(&Message::AnswerIncorrect(question));
    assert_eq!(text, "Wrong! The correct answer was: 3. Antarctic");
}

#[test]
fn renders_topic_menu_with_exit() {
    let topics = vec!["Geography".to_owned(), "Sports".to_owned()];
    let text = TerminalOutput.interpret_message(&Message::TopicMenu(topics));
    assert!(text.contains("Pick a topic:\n1. Geography\n2. Sports\n3. Exit"));
}

#[test]
fn renders_invalid_input() {
    assert_eq!(
        TerminalOutput.interpret_message(&Message::InvalidInput),
        "Invalid input. Please try again:"
    );
}
