pub const TITLE: &str = "gerasenha";

pub const HELP: &str = "\
Generates pseudo-random passwords from the selected characters.

Character classes
  (s) symbols     ! # $ % & * + ? @
  (d) digits      0 to 9
  (u) uppercase   A to Z
  (l) lowercase   a to z

Every character is drawn independently from all selected
classes together, so a class may be missing from a given
password. The strength bar rates the entropy estimate:
  < 28 bits useless, < 36 weak, < 60 acceptable,
  < 128 good, otherwise great.

Keys
  s d u l       toggle a class (a new password follows)
  + - arrows    length, 4 to 64 (PgUp/PgDn: 8 at a time)
  Enter Space   new password
  c             copy to clipboard
  a             about
  q Esc         quit";

/// About view: version, copyright and license. Lines fit the box.
pub fn about() -> String {
    format!(
        "Pseudo-random password generator.\n\n\
         Version {}\n\n\
         \u{a9} 2014, 2020 {}\n\n\
         Free software, license {}.\n\
         It comes with ABSOLUTELY NO WARRANTY.\n\
         See https://www.gnu.org/licenses for details.",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS"),
        env!("CARGO_PKG_LICENSE"),
    )
}
