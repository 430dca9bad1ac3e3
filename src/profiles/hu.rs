//! Hungarian trigram reference profile.
//!
//! Generated from a sample corpus. Regenerate instead of editing by hand.

pub(crate) static TRIGRAMS: &[&str] = &[
    " a ", " sz", "en ", "an ", " az", "ben", "ere", " és",
    "az ", "ek ", "emb", "gy ", "mbe", "sze", "és ", " eg",
    " em", " ho", " me", " mi", " va", "at ", "ber", "egy",
    " am", "et ", "hog", "k a", "ni ", "nye", "ogy", "ond",
    "ret", " ny", " so", "a t", "a v", "el ", "elv", "i s",
    "ik ", "meg", "mon", "n e", "nek", "sok", "yel", " el",
    " ke", " kö", " ma", " mo", "a k", "a m", "ert", "gya",
    "ind", "min", "n a", "ok ", "ra ", "rek", "sza", "t m",
    "van", "yan", "z e", "zer", "án ", " dé", " id", " ol",
    " ta", " te", "acs", "ban", "den", "dél", "ell", "em ",
    "er ", "est", "ete", "ett", "ga ", "idő", "kor", "lut",
    "lve", "mel", "más", "n s", "nda", "nde", "nk ", "on ",
    "szó", "t a", "ta ", "tbe", "te ", "ten", "tes", "tán",
    "utá", "zel", "zik", "élu", " eb", " es", " gy", " ha",
    " jo", " ké", " le", " mé", " ne", " tu", " vi", " él",
    "a a", "a g", "a n", "a s", "aba", "agy", "ak ", "al ",
    "ame", "ami", "amí", "ani", "anu", "bad", "bbe", "cso",
    "dan", "dol", "dő ", "e a", "ebb", "eke", "elk", "elm",
    "ely", "ene", "enn", "ent", "esz", "etn", "g a", "g t",
    "gon", "gye", "iis", "ism", "it ", "jog", "ják", "k e",
    "k k", "k m", "k v", "k é", "kat", "ker", "ket", "kii",
    "kés", "kön", "l s", "lat", "lel", "let", "lki", "lle",
    "lt ", "lte", "lya", "lő ", "ma ", "mer", "mit", "mél",
    "míg", "n j", "n k", "n m", "n é", "nak", "nem", "nt ",
    "nul", "oga", "oka", "oly", "orá", "ri ", "rtb", "rte",
    "s a", "s e", "s s", "sme", "sor", "ssz", "ste", "szá",
    "szé", "szü", "ság", "t e", "t i", "tal", "tan", "tt ",
    "ttü", "tud", "tün", "vac", "vek", "vet", "y k", "y s",
    "yer", "z i", "zab", "zem", "zta", "zó ", "zül", "ák ",
    "ás ", "ég ", "élt", "íg ", "üle", "ülö", "ünk", "ő e",
    "ől ", " al", " ar", " be", " bo", " bí", " do", " e ",
    " en", " fi", " fo", " go", " ig", " is", " je", " já",
    " jó", " jö", " ki", " ko", " ku", " kü", " lé", " má",
    " mű", " na", " od", " or", " pi", " re", " rö", " sa",
    " ti", " tö", " tű", " ve", " vo", " ál", " ég", " ér",
    " ót", " ül", " ők", "a d", "a e", "a l", "a p", "a r",
    "a é", "acr", "ado", "ads", "ajt", "aka", "aki", "ako",
    "all", "alu", "alá", "ana",
];
