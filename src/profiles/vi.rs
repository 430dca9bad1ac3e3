//! Vietnamese trigram reference profile.
//!
//! Generated from a sample corpus. Regenerate instead of editing by hand.

pub(crate) static TRIGRAMS: &[&str] = &[
    "ng ", " ng", " tr", "ều ", " ch", " nh", " và", "i c",
    "iều", "ời ", " kh", " th", "n n", "nh ", "và ", "ngư",
    "gườ", "hiề", "i n", "i t", "ười", " nó", "nói", "ong",
    "ron", "tro", "ói ", " có", " họ", " ph", "c n", "có ",
    "g t", "i đ", "n t", " mọ", " nà", " tô", " từ", "hi ",
    "khi", "mọi", "nhi", "từ ", "u t", "ày ", "ôn ", "ằng",
    "ọi ", " co", " mộ", " qu", " đi", "ay ", "con", "g h",
    "g n", "g v", "gôn", "gữ ", "một", "n c", "ngô", "ngữ",
    "on ", "t đ", "tôi", "u c", "ào ", "ình", "ôi ", "ông",
    "úng", "ối ", "ổi ", "ột ", " bu", " cô", " gi", " mu",
    " mì", " ti", " tố", " đư", " đế", " đề", "a t", "anh",
    "buổ", "c t", "ch ", "chi", "g c", "hôn", "hải", "họ ",
    "i s", "iết", "khô", "này", "o b", "phả", "t c", "t n",
    "tiế", "tối", "u n", "u đ", "uổi", "à p", "ài ", "ác ",
    "ên ", "ó n", "điề", "đượ", "đến", "đều", "ườn", "ược",
    "ải ", "ất ", "ến ", "ết ", "ọc ", "ới ", "ợc ", " bi",
    " bằ", " bữ", " cũ", " củ", " do", " mà", " na", " rằ",
    " sá", " tư", " tạ", " tự", " vư", " về", " vớ", " đú",
    " đẹ", " ấy", "a b", "a m", "a đ", "an ", "au ", "bằn",
    "bữa", "cho", "chú", "cô ", "cũn", "của", "do ", "g k",
    "g m", "gày", "gắn", "h b", "h m", "h v", "h đ", "hau",
    "hay", "ho ", "hác", "hún", "hế ", "học", "hời", "hữn",
    "i b", "i h", "i k", "i l", "i r", "i v", "i x", "iệu",
    "khá", "m v", "mìn", "n b", "n p", "n đ", "nay", "ngà",
    "nha", "nhữ", "nào", "o t", "qua", "quy", "rằn", "rẻ ",
    "tha", "thế", "thờ", "trư", "trẻ", "tự ", "u m", "uan",
    "uyề", "vào", "vườ", "về ", "với", "y h", "y n", "yền",
    "à b", "à m", "à t", "âm ", "ô ấ", "đún", "đẹp", "ũng",
    "ư t", "ước", "ấy ", "ần ", "ẹp ", "ền ", "ệu ", "ớc ",
    "ờn ", "ủa ", "ữa ", "ững", "ự d", " ba", " bá", " bì",
    " bầ", " bế", " bị", " bở", " cu", " cá", " câ", " cò",
    " cạ", " cả", " cầ", " cố", " dà", " dù", " dễ", " em",
    " gầ", " gắ", " ha", " hi", " ho", " hó", " hô", " hơ",
    " hằ", " hợ", " hữ", " ki", " li", " là", " lê", " lú",
    " lý", " lư", " lị", " lợ", " lử", " ma", " mè", " mẹ",
    " nê", " nư", " ra", " rấ", " si", " sắ", " sẽ", " số",
    " sớ", " sử", " tà", " tâ", " tì", " tí", " tấ", " vi",
    " vẫ", " xa", " xu", " xử",
];
