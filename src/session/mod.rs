//! Interactive quiz session
//!
//! Drives one play-through as a small state machine: name prompt, category
//! selection, the shuffled question loop with boss checkpoints, then the
//! final summary and save. The runner is generic over its line input and
//! output so the whole flow can be exercised with scripted I/O.

use std::io::{BufRead, Write};

use anyhow::Result;
use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::answer::{self, AnswerMatch};
use crate::bank::{BOSS_CATEGORY, BossSchedule, Question, QuestionBank};
use crate::config::Config;
use crate::player::store::ProgressStore;
use crate::player::{Player, achievements};

const SEPARATOR: &str = "--------------------------------------";
const BOSS_INTRO: &str = "\n👹 BOSS FIGHT! Answer this to complete the chapter!";

/// One interactive play-through
pub struct Session<R, W> {
    config: Config,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session over the given line input and output
    pub fn new(config: Config, input: R, output: W) -> Self {
        Self { config, input, output }
    }

    /// Run a full session: greet, select, play, then summarize and save.
    ///
    /// The player record is mutated in place; persistence happens once, at
    /// the end, and a failed save is reported without aborting the summary.
    pub fn run(
        &mut self,
        bank: &QuestionBank,
        bosses: &BossSchedule,
        player: &mut Player,
        store: &ProgressStore,
    ) -> Result<()> {
        self.prompt_name(player)?;

        let mut questions = self.choose_questions(bank)?;
        questions.shuffle(&mut thread_rng());

        self.play(&questions, bosses, player)?;
        self.finish(player, store)
    }

    /// Ask for a name if the player still carries the default placeholder.
    /// A blank reply keeps the placeholder.
    fn prompt_name(&mut self, player: &mut Player) -> Result<()> {
        if !player.has_default_name() {
            return Ok(());
        }

        write!(self.output, "Enter your name: ")?;
        self.output.flush()?;
        let name = self.read_line()?;
        if !name.is_empty() {
            player.name = name;
        }
        Ok(())
    }

    /// Present the category list and read an optional filter. An unmatched
    /// filter falls back to the whole bank, with a note to the operator.
    fn choose_questions(&mut self, bank: &QuestionBank) -> Result<Vec<Question>> {
        writeln!(self.output, "\nChoose a category to focus on or press Enter for all:")?;
        for category in bank.categories() {
            writeln!(self.output, "- {category}")?;
        }
        write!(self.output, "\n> ")?;
        self.output.flush()?;

        let filter = self.read_line()?;
        if filter.is_empty() {
            return Ok(bank.all());
        }

        let selected = bank.matching(&filter);
        if selected.is_empty() {
            tracing::debug!("Category filter {filter:?} matched nothing, using the full bank");
            writeln!(self.output, "No matching category found. Using all questions.")?;
            return Ok(bank.all());
        }
        Ok(selected)
    }

    /// The question loop. Positions are 1-based within this session's
    /// sequence; boss checkpoints are purely positional, never per-category.
    /// An empty selection falls straight through.
    fn play(
        &mut self,
        questions: &[Question],
        bosses: &BossSchedule,
        player: &mut Player,
    ) -> Result<()> {
        let total = questions.len();

        for (idx, question) in questions.iter().enumerate() {
            let position = idx + 1;
            writeln!(self.output, "[{position}/{total}] {}", question.category)?;
            writeln!(self.output, "{}", question.prompt)?;
            let reply = self.prompt_line()?;

            match answer::match_answer(&reply, &question.answer) {
                AnswerMatch::Exact => {
                    writeln!(self.output, "✅ Correct! +{} XP", self.config.correct_xp)?;
                    self.score(player, &question.category)?;
                }
                AnswerMatch::Close => {
                    writeln!(self.output, "✅ Close enough! We'll count that as correct.")?;
                    self.score(player, &question.category)?;
                }
                AnswerMatch::Miss => {
                    writeln!(self.output, "❌ Incorrect. Correct answer: {}", question.answer)?;
                }
            }
            writeln!(self.output, "{SEPARATOR}")?;

            if self.config.boss_interval > 0 && position % self.config.boss_interval == 0 {
                let checkpoint = position / self.config.boss_interval;
                if let Some(boss) = bosses.at_checkpoint(checkpoint) {
                    self.boss_encounter(boss, player)?;
                }
            }
        }
        Ok(())
    }

    /// Award regular XP and announce a level-up whenever the category total
    /// lands on an exact multiple of the threshold.
    fn score(&mut self, player: &mut Player, category: &str) -> Result<()> {
        let total = player.award(category, self.config.correct_xp);
        if self.config.level_threshold > 0 && total % self.config.level_threshold == 0 {
            writeln!(self.output, "🏅 You leveled up in {category}!")?;
        }
        Ok(())
    }

    /// A boss question: same matching, bigger reward, always credited to the
    /// dedicated "Boss" pseudo-category.
    fn boss_encounter(&mut self, boss: &Question, player: &mut Player) -> Result<()> {
        writeln!(self.output, "{BOSS_INTRO}")?;
        writeln!(self.output, "{}", boss.prompt)?;
        let reply = self.prompt_line()?;

        match answer::match_answer(&reply, &boss.answer) {
            AnswerMatch::Exact => {
                writeln!(self.output, "🎉 Boss defeated! +{} XP", self.config.boss_xp)?;
                player.award(BOSS_CATEGORY, self.config.boss_xp);
            }
            AnswerMatch::Close => {
                writeln!(
                    self.output,
                    "🎉 Boss defeated with a near-match! +{} XP",
                    self.config.boss_xp
                )?;
                player.award(BOSS_CATEGORY, self.config.boss_xp);
            }
            AnswerMatch::Miss => {
                writeln!(self.output, "💀 You failed the boss. Correct answer: {}", boss.answer)?;
            }
        }
        writeln!(self.output, "{SEPARATOR}")?;
        Ok(())
    }

    /// Persist the record, then print the XP breakdown and achievements.
    /// A failed save downgrades to a warning; the summary still prints.
    fn finish(&mut self, player: &Player, store: &ProgressStore) -> Result<()> {
        let earned = achievements::evaluate(player);
        if let Err(err) = store.save(player, &earned) {
            tracing::warn!("Could not save progress to {:?}: {err}", store.path());
            writeln!(self.output, "⚠️  Could not save progress; results won't carry over.")?;
        }

        writeln!(self.output, "\nGame over. Here's your XP breakdown:")?;
        for (category, xp) in &player.xp {
            writeln!(self.output, "{category}: {xp} XP")?;
        }
        write_achievements(&mut self.output, player)?;
        Ok(())
    }

    fn prompt_line(&mut self) -> Result<String> {
        write!(self.output, "> ")?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

/// Write the earned-badges list for a player
pub fn write_achievements<W: Write>(out: &mut W, player: &Player) -> Result<()> {
    writeln!(out, "\n🏆 Achievements:")?;
    for badge in achievements::evaluate(player) {
        writeln!(out, "- {} {}: {}", badge.icon(), badge.label(), badge.describe())?;
    }
    Ok(())
}

/// The read-only achievements query: report on the loaded record without
/// running a session or touching the save file.
pub fn write_achievement_report<W: Write>(out: &mut W, player: &Player) -> Result<()> {
    writeln!(out, "\n📜 Achievements for {}:", player.name)?;
    write_achievements(out, player)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;
    use crate::bank::builtin;

    fn session(answers: &[&str]) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
        session_with(Config::default(), answers)
    }

    fn session_with(config: Config, answers: &[&str]) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
        let mut script = answers.join("\n");
        script.push('\n');
        Session::new(config, Cursor::new(script.into_bytes()), Vec::new())
    }

    fn output_of(session: &Session<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(session.output.clone()).unwrap()
    }

    fn questions(category: &str, n: usize) -> Vec<Question> {
        (0..n).map(|i| Question::new(category, format!("Question {i}?"), "yes")).collect()
    }

    #[test]
    fn level_up_fires_on_every_exact_multiple() {
        let qs = questions("Networking", 6);
        let answers: Vec<&str> = vec!["yes"; 6];
        let mut s = session(&answers);
        let mut player = Player::default();

        s.play(&qs, &BossSchedule::default(), &mut player).unwrap();

        assert_eq!(player.xp["Networking"], 60);
        let out = output_of(&s);
        // 30 and 60, never 10/20/40/50
        assert_eq!(out.matches("You leveled up in Networking").count(), 2);
    }

    #[test]
    fn level_up_counts_from_persisted_xp() {
        let qs = questions("Networking", 3);
        let mut s = session(&["yes", "yes", "yes"]);
        let mut player = Player::default();
        player.award("Networking", 10);

        s.play(&qs, &BossSchedule::default(), &mut player).unwrap();

        // 20, 30, 40: only the 30 crossing announces
        assert_eq!(player.xp["Networking"], 40);
        assert_eq!(output_of(&s).matches("You leveled up").count(), 1);
    }

    #[test]
    fn miss_reveals_answer_and_awards_nothing() {
        let qs = questions("OSINT", 1);
        let mut s = session(&["definitely not"]);
        let mut player = Player::default();

        s.play(&qs, &BossSchedule::default(), &mut player).unwrap();

        assert!(player.xp.is_empty());
        assert!(output_of(&s).contains("Incorrect. Correct answer: yes"));
    }

    #[test]
    fn exact_and_close_answers_get_distinct_feedback() {
        let qs = vec![
            Question::new("Web Security", "What does XSS stand for?", "Cross Site Scripting"),
            Question::new("Web Security", "And again?", "Cross Site Scripting"),
        ];
        let mut s = session(&["cross-site scripting", "Cross Site Scriting"]);
        let mut player = Player::default();

        s.play(&qs, &BossSchedule::default(), &mut player).unwrap();

        let out = output_of(&s);
        assert!(out.contains("✅ Correct! +10 XP"));
        assert!(out.contains("✅ Close enough! We'll count that as correct."));
        assert_eq!(player.xp["Web Security"], 20);
    }

    #[test]
    fn boss_fires_only_at_scheduled_checkpoints() {
        let config = Config { boss_interval: 2, ..Default::default() };
        let schedule = BossSchedule::new([
            (1, Question::new(BOSS_CATEGORY, "First boss?", "one")),
            (3, Question::new(BOSS_CATEGORY, "Third boss?", "three")),
        ]);
        let qs = questions("Networking", 6);
        // six regular misses; bosses after positions 2 and 6 answered right,
        // position 4 is checkpoint 2 and has no boss
        let mut s = session_with(config, &["x", "x", "one", "x", "x", "x", "x", "three"]);
        let mut player = Player::default();

        s.play(&qs, &schedule, &mut player).unwrap();

        let out = output_of(&s);
        assert_eq!(out.matches("BOSS FIGHT").count(), 2);
        assert_eq!(player.xp[BOSS_CATEGORY], 40);
    }

    #[test]
    fn default_schedule_has_no_boss_in_the_first_twenty_questions() {
        let qs = questions("Networking", 20);
        let answers: Vec<&str> = vec!["x"; 20];
        let mut s = session(&answers);
        let mut player = Player::default();

        s.play(&qs, &builtin::boss_schedule(), &mut player).unwrap();

        assert!(!output_of(&s).contains("BOSS FIGHT"));
        assert!(!player.xp.contains_key(BOSS_CATEGORY));
    }

    #[test]
    fn failed_boss_awards_nothing() {
        let config = Config { boss_interval: 1, ..Default::default() };
        let schedule =
            BossSchedule::new([(1, Question::new(BOSS_CATEGORY, "Boss?", "the right answer"))]);
        let qs = questions("OSINT", 1);
        let mut s = session_with(config, &["x", "hopelessly wrong"]);
        let mut player = Player::default();

        s.play(&qs, &schedule, &mut player).unwrap();

        assert!(!player.xp.contains_key(BOSS_CATEGORY));
        assert!(output_of(&s).contains("You failed the boss. Correct answer: the right answer"));
    }

    #[test]
    fn empty_selection_asks_nothing() {
        let mut s = session(&[]);
        let mut player = Player::default();

        s.play(&[], &builtin::boss_schedule(), &mut player).unwrap();

        assert_eq!(output_of(&s), "");
        assert!(player.xp.is_empty());
    }

    #[test]
    fn blank_filter_selects_the_whole_bank() {
        let bank = builtin::question_bank();
        let mut s = session(&[""]);

        let selected = s.choose_questions(&bank).unwrap();
        assert_eq!(selected.len(), bank.len());
    }

    #[test]
    fn category_filter_is_case_insensitive() {
        let bank = builtin::question_bank();
        let mut s = session(&["networking"]);

        let selected = s.choose_questions(&bank).unwrap();
        assert!(!selected.is_empty());
        assert!(selected.iter().all(|q| q.category == "Networking"));
    }

    #[test]
    fn unmatched_filter_falls_back_to_the_whole_bank() {
        let bank = builtin::question_bank();
        let mut s = session(&["Underwater Basket Weaving"]);

        let selected = s.choose_questions(&bank).unwrap();
        assert_eq!(selected.len(), bank.len());
        assert!(output_of(&s).contains("No matching category found. Using all questions."));
    }

    #[test]
    fn name_prompt_records_a_new_name() {
        let mut s = session(&["Rook"]);
        let mut player = Player::default();

        s.prompt_name(&mut player).unwrap();
        assert_eq!(player.name, "Rook");
    }

    #[test]
    fn blank_name_keeps_the_placeholder() {
        let mut s = session(&[""]);
        let mut player = Player::default();

        s.prompt_name(&mut player).unwrap();
        assert_eq!(player.name, "Analyst");
    }

    #[test]
    fn named_player_is_not_prompted() {
        let mut s = session(&[]);
        let mut player = Player { name: "Rook".into(), ..Default::default() };

        s.prompt_name(&mut player).unwrap();
        assert_eq!(output_of(&s), "");
    }

    #[test]
    fn finish_saves_and_prints_summary_and_badges() {
        let dir = tempdir().unwrap();
        let store = ProgressStore::at(dir.path().join("save.json"));
        let mut s = session(&[]);
        let mut player = Player::default();
        player.award("Networking", 30);

        s.finish(&player, &store).unwrap();

        let out = output_of(&s);
        assert!(out.contains("Networking: 30 XP"));
        assert!(out.contains("🏆 Achievements:"));
        assert!(out.contains("Sharp Mind"));
        assert_eq!(store.load(), player);
    }

    #[test]
    fn failed_save_still_prints_the_summary() {
        let dir = tempdir().unwrap();
        // a file where the parent directory should be makes the save fail
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let store = ProgressStore::at(blocker.join("save.json"));

        let mut s = session(&[]);
        let mut player = Player::default();
        player.award("OSINT", 10);

        s.finish(&player, &store).unwrap();

        let out = output_of(&s);
        assert!(out.contains("Could not save progress"));
        assert!(out.contains("OSINT: 10 XP"));
    }

    #[test]
    fn achievement_report_is_read_only() {
        let dir = tempdir().unwrap();
        let store = ProgressStore::at(dir.path().join("save.json"));
        let player = store.load();

        let mut out = Vec::new();
        write_achievement_report(&mut out, &player).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("📜 Achievements for Analyst:"));
        assert!(text.contains("Sharp Mind"));
        assert!(!store.path().exists());
    }

    #[test]
    fn full_run_over_a_tiny_bank() {
        let bank = QuestionBank::new(questions("Networking", 2));
        let dir = tempdir().unwrap();
        let store = ProgressStore::at(dir.path().join("save.json"));
        // name, blank category filter, two answers (order is shuffled but
        // both questions share the same canonical answer)
        let mut s = session(&["Rook", "", "yes", "yes"]);
        let mut player = Player::default();

        s.run(&bank, &builtin::boss_schedule(), &mut player, &store).unwrap();

        assert_eq!(player.name, "Rook");
        assert_eq!(player.xp["Networking"], 20);
        assert_eq!(store.load(), player);
        assert!(output_of(&s).contains("Game over."));
    }
}
