/// worked examples of the electrochemistry engine and Frost diagrams
pub mod frost_examples;
