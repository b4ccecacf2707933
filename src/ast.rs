use std::{fmt, rc::Rc};

/// The root of every parsed program.
///
/// A program is an ordered sequence of statements. Rendering a program joins
/// the rendering of its statements with `"; "`, which re-parses to the same
/// tree.
///
/// ## Example
/// ```
/// use monkey::interpreter::parser::core::Parser;
///
/// let mut parser = Parser::new("var x = 1 + 2 * 3; x");
/// let program = parser.parse_program();
///
/// assert!(parser.errors().is_empty());
/// assert_eq!(program.to_string(), "var x = (1 + (2 * 3)); x");
/// assert_eq!(program.token_literal(), "var");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

impl Program {
    /// Returns the literal of the token the first statement started with, or
    /// an empty string for an empty program.
    #[must_use]
    pub fn token_literal(&self) -> String {
        self.statements
            .first()
            .map_or_else(String::new, Statement::token_literal)
    }
}

/// A statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A variable declaration: `var <name> = <value>`.
    Var {
        /// The declared name.
        name:  Identifier,
        /// The bound expression.
        value: Expression,
    },
    /// An early exit from the enclosing function: `return <value>`.
    Return {
        /// The returned expression.
        value: Expression,
    },
    /// An expression used as a statement.
    Expression(Expression),
}

impl Statement {
    /// Returns the literal of the token the statement started with.
    #[must_use]
    pub fn token_literal(&self) -> String {
        match self {
            Self::Var { .. } => "var".to_string(),
            Self::Return { .. } => "return".to_string(),
            Self::Expression(expression) => expression.token_literal(),
        }
    }
}

/// A braced sequence of statements, used as the body of functions, `if`
/// branches and `while` loops.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockStatement {
    /// Statements inside the braces.
    pub statements: Vec<Statement>,
}

/// A name, either referenced or declared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    /// The name itself.
    pub name: String,
}

impl Identifier {
    /// Creates an identifier.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// An abstract syntax tree node representing an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// Reference to a binding by name.
    Identifier(Identifier),
    /// An integer literal such as `5`.
    Integer(i64),
    /// A boolean literal, `true` or `false`.
    Boolean(bool),
    /// A string literal such as `"monkey"`.
    Str(String),
    /// An array literal such as `[1, 2 * 2]`.
    Array(Vec<Self>),
    /// A hash literal such as `{"one": 1}`. Pairs keep their source order.
    Hash(Vec<(Self, Self)>),
    /// A prefix operation such as `-x` or `!ok`.
    Prefix {
        /// The operator.
        operator: PrefixOperator,
        /// The operand.
        right:    Box<Self>,
    },
    /// A binary operation such as `a + b`.
    Infix {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        operator: InfixOperator,
        /// Right operand.
        right:    Box<Self>,
    },
    /// An index operation such as `items[0]`.
    Index {
        /// The indexed collection.
        left:  Box<Self>,
        /// The index or key.
        index: Box<Self>,
    },
    /// A conditional expression.
    If {
        /// The condition, evaluated for truthiness.
        condition:   Box<Self>,
        /// Block evaluated when the condition is truthy.
        consequence: BlockStatement,
        /// Optional block evaluated when the condition is falsy.
        alternative: Option<BlockStatement>,
    },
    /// A loop that runs its body while the condition is truthy.
    While {
        /// The loop condition.
        condition: Box<Self>,
        /// The loop body.
        body:      BlockStatement,
    },
    /// A function literal such as `fn(x, y) { x + y }`.
    Function(Rc<FunctionLiteral>),
    /// A call such as `add(1, 2)`.
    Call {
        /// Expression producing the callee.
        function:  Box<Self>,
        /// Argument expressions, evaluated left to right.
        arguments: Vec<Self>,
    },
}

/// Parameters and body of a function literal.
///
/// Kept behind an `Rc` so that every function value created from the same
/// literal shares it instead of copying the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionLiteral {
    /// Parameter names in declaration order.
    pub parameters: Vec<Identifier>,
    /// The function body.
    pub body:       BlockStatement,
}

impl Expression {
    /// Returns the literal of the token the expression originated from.
    ///
    /// For operators this is the operator itself, for literals the literal
    /// text and for compound expressions the opening keyword or delimiter.
    ///
    /// ## Example
    /// ```
    /// use monkey::ast::{Expression, InfixOperator};
    ///
    /// let sum = Expression::Infix { left:     Box::new(Expression::Integer(1)),
    ///                               operator: InfixOperator::Plus,
    ///                               right:    Box::new(Expression::Integer(2)), };
    ///
    /// assert_eq!(sum.token_literal(), "+");
    /// assert_eq!(sum.to_string(), "(1 + 2)");
    /// ```
    #[must_use]
    pub fn token_literal(&self) -> String {
        match self {
            Self::Identifier(identifier) => identifier.name.clone(),
            Self::Integer(value) => value.to_string(),
            Self::Boolean(value) => value.to_string(),
            Self::Str(value) => value.clone(),
            Self::Array(_) | Self::Index { .. } => "[".to_string(),
            Self::Hash(_) => "{".to_string(),
            Self::Prefix { operator, .. } => operator.to_string(),
            Self::Infix { operator, .. } => operator.to_string(),
            Self::If { .. } => "if".to_string(),
            Self::While { .. } => "while".to_string(),
            Self::Function(_) => "fn".to_string(),
            Self::Call { .. } => "(".to_string(),
        }
    }
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical NOT of the operand's truthiness (`!`).
    Bang,
    /// Integer negation (`-`).
    Minus,
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition or string concatenation (`+`)
    Plus,
    /// Subtraction (`-`)
    Minus,
    /// Multiplication (`*`)
    Asterisk,
    /// Integer division (`/`)
    Slash,
    /// Less than (`<`)
    Lt,
    /// Greater than (`>`)
    Gt,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bang => write!(f, "!"),
            Self::Minus => write!(f, "-"),
        }
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

/// Writes `items` separated by `separator`.
fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>,
                                 items: &[T],
                                 separator: &str)
                                 -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            write!(f, "{separator}")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.statements, "; ")
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Var { name, value } => write!(f, "var {name} = {value}"),
            Self::Return { value } => write!(f, "return {value}"),
            Self::Expression(expression) => write!(f, "{expression}"),
        }
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.statements.is_empty() {
            return write!(f, "{{ }}");
        }

        write!(f, "{{ ")?;
        write_joined(f, &self.statements, "; ")?;
        write!(f, " }}")
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fn(")?;
        write_joined(f, &self.parameters, ", ")?;
        write!(f, ") {}", self.body)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(identifier) => write!(f, "{identifier}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "\"{value}\""),
            Self::Array(elements) => {
                write!(f, "[")?;
                write_joined(f, elements, ", ")?;
                write!(f, "]")
            },
            Self::Hash(pairs) => {
                write!(f, "{{")?;
                for (index, (key, value)) in pairs.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            },
            Self::Prefix { operator, right } => write!(f, "({operator}{right})"),
            Self::Infix { left,
                          operator,
                          right, } => write!(f, "({left} {operator} {right})"),
            Self::Index { left, index } => write!(f, "({left}[{index}])"),
            Self::If { condition,
                       consequence,
                       alternative, } => {
                write!(f, "if ({condition}) {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            },
            Self::While { condition, body } => write!(f, "while ({condition}) {body}"),
            Self::Function(literal) => write!(f, "{literal}"),
            Self::Call { function,
                         arguments, } => {
                write!(f, "{function}(")?;
                write_joined(f, arguments, ", ")?;
                write!(f, ")")
            },
        }
    }
}
