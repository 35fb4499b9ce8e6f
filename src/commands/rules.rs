//! The rules command

/// Print how the game is played
pub fn print_rules() {
    println!("How to play:");
    println!();
    println!("Guess the secret word in 6 tries. Every guess must be a listed");
    println!("word of the right length. After each guess, every letter is");
    println!("marked:");
    println!();
    println!("  !  the letter is in the word, in the correct spot");
    println!("  ~  the letter is in the word, but in the wrong spot");
    println!("  x  the letter is not in the word");
    println!();
    println!("In colored output the marks show as green, yellow, and gray");
    println!("backgrounds instead. The letters a-z are printed after each");
    println!("guess with everything you have ruled out blanked away.");
    println!();
    println!("Solver mode: pass --hint WORD VERDICT (repeatable) to list the");
    println!("words still consistent with the results of earlier guesses,");
    println!("using the marks above as the VERDICT string.");
}
