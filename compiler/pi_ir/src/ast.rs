//! Surface syntax tree.
//!
//! This is the output contract of the external parser and the input of the
//! translator. Identifiers are plain strings here; the translator interns them.
//! Binary operators keep the lexeme the parser saw (`"+"`, `"and"`, `"<="`),
//! so the translator is where unsupported operators are rejected.

/// Surface expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Ident(String),
    Num(f64),
    Bool(bool),
    Binary {
        op: String,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Not(Box<Expr>),
    /// `&x`
    AddressOf(String),
    /// `*x`
    ValueOf(String),
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }

    pub fn binary(op: impl Into<String>, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            op: op.into(),
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn logical_not(operand: Expr) -> Self {
        Expr::Not(Box::new(operand))
    }
}

/// A function declaration: `fn name(formals) block`.
#[derive(Clone, Debug, PartialEq)]
pub struct FnDecl {
    pub name: String,
    pub formals: Vec<String>,
    pub body: BlockStmt,
}

/// Surface declaration.
#[derive(Clone, Debug, PartialEq)]
pub enum Decl {
    /// `var x = e`: a mutable reference cell.
    Var(String, Expr),
    /// `cons x = e`: an immutable binding.
    Cons(String, Expr),
    /// `fn f(...) { ... }`: a non-recursive function.
    Fn(FnDecl),
    /// `rec fn f(...) { ... } and g(...) { ... }`: a mutually recursive group.
    Rec(Vec<FnDecl>),
}

/// `let decls in cmds end`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlockStmt {
    pub decls: Vec<Decl>,
    pub cmds: Vec<Cmd>,
}

impl BlockStmt {
    pub fn new(decls: Vec<Decl>, cmds: Vec<Cmd>) -> Self {
        BlockStmt { decls, cmds }
    }
}

/// Surface command.
#[derive(Clone, Debug, PartialEq)]
pub enum Cmd {
    Nop,
    Assign(String, Expr),
    While(Expr, Vec<Cmd>),
    If(Expr, Vec<Cmd>, Option<Vec<Cmd>>),
    Block(BlockStmt),
    Print(Expr),
    Call(String, Vec<Expr>),
}

impl Cmd {
    pub fn assign(name: impl Into<String>, value: Expr) -> Self {
        Cmd::Assign(name.into(), value)
    }

    pub fn call(name: impl Into<String>, actuals: Vec<Expr>) -> Self {
        Cmd::Call(name.into(), actuals)
    }

    pub fn block(decls: Vec<Decl>, cmds: Vec<Cmd>) -> Self {
        Cmd::Block(BlockStmt::new(decls, cmds))
    }
}

/// A parsed program: the top-level forest of commands.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SurfaceProgram {
    pub commands: Vec<Cmd>,
}

impl SurfaceProgram {
    pub fn new(commands: Vec<Cmd>) -> Self {
        SurfaceProgram { commands }
    }
}
