//! Evaluador aritmético restringido para el motor de dudas.
//!
//! Solo números, `+ - * /` y paréntesis; nunca una facilidad de evaluación
//! de código genérica. Cualquier otro símbolo es un error y el llamador
//! cae al siguiente nivel de la cadena de reglas.

#[derive(Debug, Clone, PartialEq)]
pub enum ArithError {
    LexError(String),
    ParseError(String),
    EvalError(String),
}

#[derive(Debug, Clone, PartialEq)]
enum TokenKind {
    Number(f64),
    Symbol(char),
    Eof,
}

struct Lexer {
    chars: Vec<char>,
    idx: usize,
}

impl Lexer {
    fn new(src: &str) -> Self {
        Self {
            chars: src.chars().collect(),
            idx: 0,
        }
    }

    fn lex(&mut self) -> Result<Vec<TokenKind>, ArithError> {
        let mut out = Vec::new();
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.bump();
                continue;
            }
            let kind = if ch.is_ascii_digit() || ch == '.' {
                self.lex_number()?
            } else {
                match ch {
                    '+' | '-' | '*' | '/' | '(' | ')' => {
                        self.bump();
                        TokenKind::Symbol(ch)
                    }
                    _ => {
                        return Err(ArithError::LexError(format!("Símbolo no soportado: {ch}")));
                    }
                }
            };
            out.push(kind);
        }
        out.push(TokenKind::Eof);
        Ok(out)
    }

    fn lex_number(&mut self) -> Result<TokenKind, ArithError> {
        let mut s = String::new();
        let mut seen_dot = false;
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                s.push(ch);
                self.bump();
            } else if ch == '.' && !seen_dot {
                seen_dot = true;
                s.push(ch);
                self.bump();
            } else {
                break;
            }
        }
        s.parse::<f64>()
            .map(TokenKind::Number)
            .map_err(|_| ArithError::LexError(format!("Número inválido: {s}")))
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.idx).copied()
    }

    fn bump(&mut self) {
        self.idx += 1;
    }
}

struct Parser {
    tokens: Vec<TokenKind>,
    pos: usize,
}

impl Parser {
    fn new(tokens: Vec<TokenKind>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> &TokenKind {
        self.tokens.get(self.pos).unwrap_or(&TokenKind::Eof)
    }

    fn bump(&mut self) -> TokenKind {
        let t = self.peek().clone();
        self.pos += 1;
        t
    }

    fn eat_symbol(&mut self, sym: char) -> bool {
        if *self.peek() == TokenKind::Symbol(sym) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    // expr := term (('+' | '-') term)*
    fn parse_expr(&mut self) -> Result<f64, ArithError> {
        let mut acc = self.parse_term()?;
        loop {
            if self.eat_symbol('+') {
                acc += self.parse_term()?;
            } else if self.eat_symbol('-') {
                acc -= self.parse_term()?;
            } else {
                return Ok(acc);
            }
        }
    }

    // term := unary (('*' | '/') unary)*
    fn parse_term(&mut self) -> Result<f64, ArithError> {
        let mut acc = self.parse_unary()?;
        loop {
            if self.eat_symbol('*') {
                acc *= self.parse_unary()?;
            } else if self.eat_symbol('/') {
                let rhs = self.parse_unary()?;
                if rhs == 0.0 {
                    return Err(ArithError::EvalError("División por cero".into()));
                }
                acc /= rhs;
            } else {
                return Ok(acc);
            }
        }
    }

    fn parse_unary(&mut self) -> Result<f64, ArithError> {
        if self.eat_symbol('-') {
            return Ok(-self.parse_unary()?);
        }
        if self.eat_symbol('+') {
            return self.parse_unary();
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<f64, ArithError> {
        match self.bump() {
            TokenKind::Number(n) => Ok(n),
            TokenKind::Symbol('(') => {
                let inner = self.parse_expr()?;
                if !self.eat_symbol(')') {
                    return Err(ArithError::ParseError("Falta ')'".into()));
                }
                Ok(inner)
            }
            other => Err(ArithError::ParseError(format!(
                "Token inesperado: {other:?}"
            ))),
        }
    }
}

/// Evalúa una expresión aritmética con precedencia estándar.
pub fn eval_expr(src: &str) -> Result<f64, ArithError> {
    let tokens = Lexer::new(src).lex()?;
    if tokens == vec![TokenKind::Eof] {
        return Err(ArithError::ParseError("Expresión vacía".into()));
    }
    let mut parser = Parser::new(tokens);
    let value = parser.parse_expr()?;
    if *parser.peek() != TokenKind::Eof {
        return Err(ArithError::ParseError(format!(
            "Sobran tokens tras la expresión: {:?}",
            parser.peek()
        )));
    }
    if !value.is_finite() {
        return Err(ArithError::EvalError("Resultado no finito".into()));
    }
    Ok(value)
}
