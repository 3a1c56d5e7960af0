mod options;

use std::io::{BufRead, Write};

pub use options::TSPServerOptions;

use crate::prelude::*;

/// Serves a 2048 session over a line-oriented text protocol: one command per line, each answer closed by `ok`.
pub struct TSPServer<W: Write> {
    session: Session,
    out: W,
}

impl TSPServer<std::io::Stdout> {
    /// Produces a new server answering on stdout.
    pub fn new(options: TSPServerOptions) -> Result<TSPServer<std::io::Stdout>> {
        TSPServer::with_output(options, std::io::stdout())
    }
}

impl<W: Write> TSPServer<W> {
    /// Produces a new server answering on the given writer, with a fresh game already set up.
    pub fn with_output(options: TSPServerOptions, out: W) -> Result<TSPServer<W>> {
        let config = options.session_config();
        log::info!("starting with {config:?}");
        let mut session = config.get_session()?;
        session.new_game(None)?;
        Ok(TSPServer { session, out })
    }

    /// Reads and answers commands until the input ends or `quit` arrives.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        for line in input.lines() {
            let cmdstr = line?;
            let args: Vec<&str> = cmdstr.split_whitespace().collect();
            let cmd = *args.first().unwrap_or(&"");

            if cmd == "quit" {
                log::info!("quitting");
                return self.ok();
            }
            self.apply(cmd, &args[1.min(args.len())..])?;
        }
        Ok(())
    }

    /// Runs a command.
    fn apply(&mut self, cmd: &str, args: &[&str]) -> Result<()> {
        let result = match cmd
        {
            | "" => Ok(()),
            | "add" => self.add_tile(args),
            | "board" => self.board(),
            | "clear" => self.clear(),
            | "info" => self.info(),
            | "maxscore" => self.max_score(),
            | "newgame" => self.new_game(args),
            | "over" => self.game_over(),
            | "redo" => self.redo(),
            | "score" => self.score(),
            | "spawn" => self.spawn(),
            | "tilt" => self.tilt(args),
            | "undo" => self.undo(),
            | _ => Err(anyhow!("unrecognized command {cmd}")),
        };

        match result
        {
            Ok(_) => {
                log::debug!("Command completed successfully: {cmd} {}", args.join(" "));
                self.ok()
            },
            Err(err) => {
                log::warn!("encountered recoverable error:\n{err}");
                self.err(&err)
            },
        }
    }

    fn add_tile(&mut self, args: &[&str]) -> Result<()> {
        let [value, col, row] = args else {
            return Err(anyhow!("usage: add <value> <col> <row>"));
        };
        let tile = Tile::new(value.parse()?, col.parse()?, row.parse()?)?;
        self.session.add_tile(tile)?;
        self.notate()
    }

    fn board(&mut self) -> Result<()> {
        let repr = self.session.model().to_string();
        writeln!(self.out, "{}", repr.trim())?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.session.clear();
        self.notate()
    }

    fn game_over(&mut self) -> Result<()> {
        writeln!(self.out, "{}", self.session.model().game_over())?;
        Ok(())
    }

    fn max_score(&mut self) -> Result<()> {
        writeln!(self.out, "{}", self.session.model().max_score())?;
        Ok(())
    }

    /// Starts a new game, optionally from a gamestring.
    fn new_game(&mut self, args: &[&str]) -> Result<()> {
        let gamestr = if !args.is_empty() {
            Some(args.join(" ").parse::<GameString>()?)
        } else {
            None
        };
        self.session.new_game(gamestr)?;
        self.notate()
    }

    fn redo(&mut self) -> Result<()> {
        self.session.redo()?;
        self.notate()
    }

    fn score(&mut self) -> Result<()> {
        writeln!(self.out, "{}", self.session.model().score())?;
        Ok(())
    }

    fn spawn(&mut self) -> Result<()> {
        match self.session.spawn()? {
            Some(tile) => writeln!(self.out, "{tile}")?,
            None       => writeln!(self.out, "none")?,
        };
        self.notate()
    }

    fn tilt(&mut self, args: &[&str]) -> Result<()> {
        let Some(side) = args.first() else {
            return Err(anyhow!("no side provided"));
        };
        let changed = self.session.tilt(side.parse::<Side>()?)?;
        writeln!(self.out, "{}", if changed { "changed" } else { "unchanged" })?;
        self.notate()
    }

    fn undo(&mut self) -> Result<()> {
        self.session.undo()?;
        self.notate()
    }

    // basic printers

    /// Prints the server's ID.
    fn info(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "id {} v{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        )?;
        Ok(())
    }

    /// Prints the board in grid notation.
    fn notate(&mut self) -> Result<()> {
        writeln!(self.out, "{}", self.session.model().grid().notate())?;
        Ok(())
    }

    /// Prints an error to the protocol stream.
    fn err(&mut self, err: &Error) -> Result<()> {
        writeln!(self.out, "err\n{}", err)?;
        self.ok()
    }

    /// Prints the ok footer to the protocol stream.
    fn ok(&mut self) -> Result<()> {
        writeln!(self.out, "ok")?;
        self.out.flush()?;
        Ok(())
    }
}
