pub trait StrExt {
    fn is_capitalized(&self) -> bool;

    fn capitalize(&self) -> String;

    fn uncapitalize(&self) -> String;

    /// Translate segments in square brackets in string with the given function.
    ///
    /// Square brackets can be escaped by doubling them, `[[` becomes a literal
    /// `[` and `]]` becomes a literal `]`.
    ///
    /// If the template parameter starts with a capital letter, the result from
    /// the converter is capitalized. The converter always gets lowercase values.
    ///
    /// # Examples
    ///
    /// ```
    /// use util::StrExt;
    ///
    /// fn mapping(word: &str) -> Result<String, ()> {
    ///     match word {
    ///         "bat" => Ok("newt"),
    ///         _ => Err(())
    ///     }.map(|x| x.to_string())
    /// }
    ///
    /// assert_eq!(Ok("A newt flies".into()), "A [bat] flies".templatize(mapping));
    /// assert_eq!(Ok("Newt flies".to_string()), "[Bat] flies".templatize(mapping));
    /// assert_eq!(Err(()), "A [rat] flies".templatize(mapping));
    /// assert_eq!(Ok("A [bat] flies".to_string()), "A [[bat]] flies".templatize(mapping));
    /// ```
    fn templatize<F, E>(&self, mapper: F) -> Result<String, E>
    where
        F: FnMut(&str) -> Result<String, E>;
}

impl StrExt for str {
    fn is_capitalized(&self) -> bool {
        self.chars().next().map_or(false, |c| c.is_uppercase())
    }

    fn capitalize(&self) -> String {
        let mut chars = self.chars();
        match chars.next() {
            None => String::new(),
            Some(c) => c.to_uppercase().chain(chars).collect(),
        }
    }

    fn uncapitalize(&self) -> String {
        let mut chars = self.chars();
        match chars.next() {
            None => String::new(),
            Some(c) => c.to_lowercase().chain(chars).collect(),
        }
    }

    fn templatize<F, E>(&self, mut mapper: F) -> Result<String, E>
    where
        F: FnMut(&str) -> Result<String, E>,
    {
        let mut ret = String::new();
        let mut token = String::new();
        let mut in_token = false;
        let mut chars = self.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '[' | ']' if chars.peek() == Some(&c) => {
                    chars.next();
                    if in_token {
                        token.push(c);
                    } else {
                        ret.push(c);
                    }
                }
                '[' if !in_token => in_token = true,
                ']' if in_token => {
                    in_token = false;
                    if token.is_capitalized() {
                        ret += &mapper(&token.uncapitalize())?.capitalize();
                    } else {
                        ret += &mapper(&token)?;
                    }
                    token.clear();
                }
                c if in_token => token.push(c),
                c => ret.push(c),
            }
        }

        // Unterminated token, emit verbatim.
        if in_token {
            ret.push('[');
            ret += &token;
        }

        Ok(ret)
    }
}

pub trait CharExt {
    fn is_vowel(&self) -> bool;
}

impl CharExt for char {
    fn is_vowel(&self) -> bool {
        // If accented chars are used, they need to be added here...
        matches!(self.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizers() {
        for &(text, cap) in &[
            ("", ""),
            ("a", "A"),
            ("A", "A"),
            ("bat", "Bat"),
            ("bAT", "BAT"),
            ("æìë", "Æìë"),
        ] {
            assert_eq!(&text.capitalize(), cap);
            assert_eq!(
                text.is_capitalized(),
                !text.is_empty() && text.capitalize() == text
            );
        }

        assert_eq!("Fungus".uncapitalize(), "fungus");
        assert_eq!("".uncapitalize(), "");
    }

    #[test]
    fn templates() {
        let upper = |s: &str| Ok::<String, ()>(s.to_uppercase());

        assert_eq!("".templatize(upper), Ok("".into()));
        assert_eq!("no tokens".templatize(upper), Ok("no tokens".into()));
        assert_eq!("[a] and [b]".templatize(upper), Ok("A and B".into()));
        assert_eq!("[[a]] [b]".templatize(upper), Ok("[a] B".into()));
        assert_eq!("dangling [a".templatize(upper), Ok("dangling [a".into()));
    }

    #[test]
    fn vowels() {
        assert!('a'.is_vowel());
        assert!('E'.is_vowel());
        assert!(!'b'.is_vowel());
        assert!(!'y'.is_vowel());
    }
}
