//! Serbian (Latin) trigram reference profile.
//!
//! Generated from a sample corpus. Regenerate instead of editing by hand.

pub(crate) static TRIGRAMS: &[&str] = &[
    " je", "je ", "na ", " i ", "da ", " da", " ka", " po",
    " u ", " ve", " na", " pr", "a s", "e d", "ma ", " do",
    " lj", " re", " sa", " sv", "a j", "aju", "ako", "ezi",
    "i k", "jez", "ju ", "jud", "ka ", "ko ", "li ", "lju",
    "odn", "om ", "rem", "ti ", "zik", " ko", " mn", " ra",
    " se", " sl", "a l", "am ", "di ", "dne", "e s", "eče",
    "go ", "i n", "i s", "ima", "me ", "mno", "ne ", "nog",
    "po ", "u i", "udi", "či ", " ma", " ne", " ov", " st",
    " vr", "a i", "a k", "a m", "a p", "a r", "a v", "as ",
    "e v", "eme", "i j", "ih ", "kaž", "koj", "mo ", "no ",
    "o j", "o p", "o r", "o s", "ogo", "ori", "ove", "ovo",
    "pod", "pra", "pre", "ra ", "rav", "raz", "reč", "slo",
    "sti", "sto", "stv", "sva", "u b", "u d", "u o", "u p",
    "u u", "več", "vre", "ći ", "čer", "že ", " ba", " bi",
    " dr", " du", " im", " kr", " le", " mi", " mo", " od",
    " on", " sp", " su", " uč", " va", " vo", " će", " či",
    " št", "a d", "a č", "ada", "ana", "azu", "ašt", "aže",
    "ba ", "baš", "bod", "ca ", "cu ", "dna", "dok", "dru",
    "du ", "e i", "e j", "e k", "e m", "e n", "e o", "e p",
    "e r", "e z", "edn", "ek ", "ema", "ena", "eni", "epo",
    "eru", "est", "eči", "gra", "i d", "i o", "i p", "i u",
    "i v", "ija", "ije", "ik ", "iku", "ili", "ion", "ist",
    "jed", "ji ", "kad", "kak", "kra", "ku ", "la ", "lep",
    "lob", "m d", "m s", "maj", "nak", "ni ", "nic", "nij",
    "o d", "o i", "o o", "o š", "obo", "od ", "oje", "ok ",
    "ome", "ona", "ora", "ost", "ože", "raj", "rat", "re ",
    "ri ", "rom", "ru ", "rug", "sam", "se ", "sta", "su ",
    "sve", "tan", "to ", "tor", "tre", "tva", "u m", "u s",
    "ugi", "uči", "va ", "vak", "vek", "veo", "ves", "vom",
    "vu ", "zum", "će ", "čit", "šti", "što", " br", " de",
    " fu", " go", " gr", " hl", " ig", " ih", " is", " iz",
    " jo", " ju", " kn", " ku", " la", " li", " ml", " ni",
    " o ", " ob", " ok", " ot", " pa", " pi", " ro", " si",
    " sm", " sr", " to", " tr", " uv", " vi", " za", " ze",
    " zn", " zv", " čo", " ši", " že", " ži", "a b", "a o",
    "a u", "a ć", "acu", "ad ", "adu", "aj ", "ajs", "ak ",
    "aka", "alo", "amo", "ani", "ans", "ao ", "are", "ari",
    "asn", "ast", "atk", "atr",
];
