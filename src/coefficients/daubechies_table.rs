//! Tabulated extremal-phase Daubechies scaling filters, orders 1 through 38
//!
//! Each table holds `2 * order` coefficients in ascending index order from 0
//! (`h_0 = 0.4829...` for order 2), normalized to sum to `sqrt(2)`.

static DB1: [f64; 2] = [
    0.7071067811865476,
    0.7071067811865476,
];

static DB2: [f64; 4] = [
    0.48296291314453416,
    0.8365163037378079,
    0.2241438680420134,
    -0.12940952255126037,
];

static DB3: [f64; 6] = [
    0.33267055295008263,
    0.8068915093110925,
    0.45987750211849154,
    -0.13501102001025458,
    -0.08544127388202666,
    0.03522629188570953,
];

static DB4: [f64; 8] = [
    0.2303778133088965,
    0.7148465705529157,
    0.6308807679298589,
    -0.027983769416859854,
    -0.18703481171909309,
    0.030841381835560764,
    0.0328830116668852,
    -0.010597401785069032,
];

static DB5: [f64; 10] = [
    0.16010239797419293,
    0.6038292697971896,
    0.7243085284377729,
    0.13842814590132074,
    -0.24229488706638203,
    -0.032244869584638375,
    0.07757149384004572,
    -0.006241490212798274,
    -0.012580751999081999,
    0.0033357252854737712,
];

static DB6: [f64; 12] = [
    0.11154074335010947,
    0.49462389039845306,
    0.7511339080210954,
    0.31525035170919763,
    -0.22626469396543983,
    -0.12976686756726194,
    0.09750160558732304,
    0.027522865530305727,
    -0.03158203931748603,
    0.0005538422011614961,
    0.004777257510945511,
    -0.0010773010853084796,
];

static DB7: [f64; 14] = [
    0.07785205408500918,
    0.3965393194819173,
    0.7291320908462351,
    0.4697822874051931,
    -0.14390600392856498,
    -0.22403618499387498,
    0.07130921926683026,
    0.08061260915108308,
    -0.03802993693501441,
    -0.01657454163066688,
    0.01255099855609984,
    0.0004295779729213665,
    -0.0018016407040474908,
    0.00035371379997452024,
];

static DB8: [f64; 16] = [
    0.05441584224310401,
    0.31287159091429995,
    0.6756307362972898,
    0.5853546836542067,
    -0.015829105256349306,
    -0.2840155429615469,
    0.0004724845739132828,
    0.12874742662047847,
    -0.017369301001807547,
    -0.044088253930794755,
    0.013981027917398282,
    0.008746094047405777,
    -0.004870352993451574,
    -0.00039174037337694705,
    0.0006754494064505693,
    -0.00011747678412476953,
];

static DB9: [f64; 18] = [
    0.038077947363878345,
    0.24383467461259034,
    0.6048231236901112,
    0.6572880780513005,
    0.13319738582500756,
    -0.2932737832791749,
    -0.09684078322297646,
    0.14854074933810638,
    0.03072568147933338,
    -0.06763282906132997,
    0.00025094711483145197,
    0.022361662123679096,
    -0.004723204757751397,
    -0.00428150368246343,
    0.0018476468830562265,
    0.00023038576352319597,
    -0.0002519631889427101,
    3.93473203162716e-05,
];

static DB10: [f64; 20] = [
    0.026670057900555554,
    0.1881768000776915,
    0.5272011889317256,
    0.6884590394536035,
    0.2811723436605775,
    -0.24984642432731538,
    -0.19594627437737705,
    0.12736934033579325,
    0.09305736460357235,
    -0.07139414716639708,
    -0.029457536821875813,
    0.033212674059341,
    0.0036065535669561697,
    -0.010733175483330575,
    0.001395351747052901,
    0.001992405295185056,
    -0.0006858566949597116,
    -0.00011646685512928545,
    9.358867032006959e-05,
    -1.3264202894521244e-05,
];

static DB11: [f64; 22] = [
    0.018694297761471083,
    0.1440670211506245,
    0.44989976435604534,
    0.6856867749162006,
    0.41196436894790744,
    -0.16227524502749036,
    -0.27423084681794696,
    0.0660435881966832,
    0.14981201246637849,
    -0.046479955116684187,
    -0.0664387856950252,
    0.031335090219046076,
    0.020840904360181062,
    -0.0153648209062016,
    -0.0033408588730144454,
    0.004928417656059041,
    -0.0003085928588151432,
    -0.0008930232506662646,
    0.0002491525235528235,
    5.4439074699368475e-05,
    -3.4634984186984996e-05,
    4.49427427723651e-06,
];

static DB12: [f64; 24] = [
    0.013112257957229518,
    0.10956627282118515,
    0.37735513521421266,
    0.6571987225793071,
    0.5158864784278157,
    -0.04476388565377463,
    -0.3161784537527855,
    -0.023779257256069726,
    0.18247860592757967,
    0.00535956967435215,
    -0.09643212009650708,
    0.010849130255822185,
    0.04154627749508444,
    -0.01221864906974828,
    -0.012840825198300683,
    0.00671149900879551,
    0.0022486072409952378,
    -0.0021795036186277603,
    6.545128212509596e-06,
    0.00038865306282093143,
    -8.850410920820432e-05,
    -2.4241545757030785e-05,
    1.2776952219379767e-05,
    -1.529071758068511e-06,
];

static DB13: [f64; 26] = [
    0.009202133538962367,
    0.08286124387290278,
    0.31199632216043804,
    0.6110558511587877,
    0.5888895704312189,
    0.08698572617964724,
    -0.31497290771138864,
    -0.12457673075081525,
    0.17947607942933985,
    0.07294893365677717,
    -0.10580761818793433,
    -0.026488406475343694,
    0.05613947710028343,
    0.0023799722540590786,
    -0.02383142071032365,
    0.003923941448797416,
    0.007255589401617566,
    -0.0027619112346568622,
    -0.001315673911892299,
    0.0009323261308672633,
    4.9251525126289464e-05,
    -0.0001651289885565055,
    3.0678537579325496e-05,
    1.0441930571408138e-05,
    -4.700416479360868e-06,
    5.220035098454864e-07,
];

static DB14: [f64; 28] = [
    0.006461153460087948,
    0.0623647588493989,
    0.2548502677926214,
    0.5543056179408938,
    0.6311878491048568,
    0.21867068775890652,
    -0.27168855227874805,
    -0.21803352999327605,
    0.1383952138648066,
    0.1399890165844607,
    -0.08674841156816969,
    -0.07154895550404614,
    0.05523712625921604,
    0.026981408307912916,
    -0.030185351540390634,
    -0.005615049530356959,
    0.01278949326633341,
    -0.000746218989268385,
    -0.0038496388680221874,
    0.001061691085606762,
    0.0007080211542355279,
    -0.0003868319473129545,
    -4.1777245770372596e-05,
    6.87550425269751e-05,
    -1.0337209184570774e-05,
    -4.389704901781394e-06,
    1.7249946753678127e-06,
    -1.7871399683113592e-07,
];

static DB15: [f64; 30] = [
    0.004538537361578899,
    0.04674339489276627,
    0.20602386398699574,
    0.4926317717081396,
    0.6458131403574243,
    0.3390025354547315,
    -0.19320413960914543,
    -0.28888259656696563,
    0.06528295284877282,
    0.190146714007123,
    -0.039666176555790945,
    -0.1111209360372317,
    0.033877143923507685,
    0.05478055058450761,
    -0.025767007328439964,
    -0.020810050169693083,
    0.015083918027835902,
    0.005101000360407543,
    -0.006487734560315745,
    -0.00024175649076162427,
    0.0019433239803822114,
    -0.000373482354137617,
    -0.0003595652443624688,
    0.00015589648992059973,
    2.5792699155318936e-05,
    -2.8133296266047814e-05,
    3.36298718173758e-06,
    1.8112704079405772e-06,
    -6.316882325881664e-07,
    6.133359913305752e-08,
];

static DB16: [f64; 32] = [
    0.003189220925347738,
    0.034907714323673344,
    0.16506428348885313,
    0.4303127228460038,
    0.637356332083789,
    0.4402902568863569,
    -0.08975108940248964,
    -0.3270633105279177,
    -0.027918208133028276,
    0.2111906939471043,
    0.027340263752716042,
    -0.1323883055638104,
    -0.006239722752474872,
    0.07592423604427631,
    -0.007588974368857738,
    -0.03688839769173014,
    0.01029765964095597,
    0.013993768859828731,
    -0.006990014563413916,
    -0.00364427962149839,
    0.003128023381206269,
    0.00040789698084971285,
    -0.0009410217493595676,
    0.00011424152003872239,
    0.00017478724522533817,
    -6.103596621410936e-05,
    -1.3945668988208893e-05,
    1.1336608661276258e-05,
    -1.0435713423116066e-06,
    -7.363656785451205e-07,
    2.3087840868575457e-07,
    -2.109339630100743e-08,
];

static DB17: [f64; 34] = [
    0.0022418070010373128,
    0.025985393703606044,
    0.1312149033078244,
    0.37035072415264114,
    0.6109966156846228,
    0.5183157640569378,
    0.027314970403293636,
    -0.32832074836396175,
    -0.1265997522158827,
    0.197310589565011,
    0.10113548917747027,
    -0.1268156917782863,
    -0.05709141963167693,
    0.08110598665416088,
    0.022312336178103798,
    -0.04692243838926974,
    -0.0032709555358192938,
    0.02273367658394627,
    -0.003042989981354637,
    -0.008602921520322855,
    0.0029679966915260947,
    0.0023012052421535457,
    -0.0014368453048029762,
    -0.00032813251940983797,
    0.0004394654277686437,
    -2.5610109566548458e-05,
    -8.204803202453391e-05,
    2.3186813798745952e-05,
    6.9906009850767515e-06,
    -4.505942477222988e-06,
    3.0165496099945573e-07,
    2.957700933316857e-07,
    -8.42394844600268e-08,
    7.2674929685616085e-09,
];

static DB18: [f64; 36] = [
    0.0015763102184407605,
    0.019288531724146376,
    0.10358846582242359,
    0.3146789413370317,
    0.5718268077666072,
    0.5718016548886513,
    0.14722311196992816,
    -0.29365404073655876,
    -0.21648093400514298,
    0.14953397556537779,
    0.1670813127632574,
    -0.09233188415084628,
    -0.10675224665982849,
    0.06488721621190545,
    0.057051247738536884,
    -0.044526141902982326,
    -0.023733210395860002,
    0.02667070592647059,
    0.006262167954305707,
    -0.013051480946612001,
    0.00011863003385811746,
    0.004943343605466738,
    -0.0011187326669924971,
    -0.0013405962983361066,
    0.0006284656829651457,
    0.0002135815619103407,
    -0.00019864855231174796,
    -1.5359171235347246e-07,
    3.7412378807400385e-05,
    -8.520602537446696e-06,
    -3.332634478885822e-06,
    1.7687129836276155e-06,
    -7.691632689885177e-08,
    -1.1760987670282317e-07,
    3.068835863045175e-08,
    -2.5079344549485983e-09,
];

static DB19: [f64; 38] = [
    0.0011086697631817106,
    0.014281098450764397,
    0.08127811326545956,
    0.26438843174089677,
    0.5244363774646549,
    0.6017045491275379,
    0.26089495265103885,
    -0.22809139421548263,
    -0.28583863175582624,
    0.07465226970810326,
    0.21234974330627848,
    -0.03351854190230288,
    -0.1427856950387366,
    0.027584350625628667,
    0.08690675555581223,
    -0.02650123625012304,
    -0.04567422627723091,
    0.02162376740958505,
    0.019375549889176127,
    -0.013988388678535142,
    -0.005866922281012175,
    0.007040747367105243,
    0.0007689543592575484,
    -0.002687551800701582,
    0.00034180865345859575,
    0.0007358025205054352,
    -0.000260676135678628,
    -0.00012460079173415878,
    8.711270467219923e-05,
    5.105950487073886e-06,
    -1.6640176297154945e-05,
    3.0109643162965265e-06,
    1.531931476691193e-06,
    -6.862755657769143e-07,
    1.4470882987978445e-08,
    4.6369377757826045e-08,
    -1.1164020670358259e-08,
    8.666848838997619e-10,
];

static DB20: [f64; 40] = [
    0.0007799536136668463,
    0.010549394624950399,
    0.06342378045908152,
    0.21994211355139703,
    0.4726961853109017,
    0.6104932389385939,
    0.36150229873933104,
    -0.13921208801148388,
    -0.32678680043403496,
    -0.016727088309077008,
    0.22829105081991632,
    0.0398502464577712,
    -0.15545875070726795,
    -0.024716827338613585,
    0.10229171917444256,
    0.005632246857307436,
    -0.06172289962468046,
    0.005874681811811827,
    0.03229429953076958,
    -0.00878932492390156,
    -0.01381052613715192,
    0.006721627302259457,
    0.004420542387045791,
    -0.0035814942596096226,
    -0.0008315621728225569,
    0.0013925596193231364,
    -5.349759843997695e-05,
    -0.00038510474869921763,
    0.00010153288973670291,
    6.77428082837773e-05,
    -3.710586183394713e-05,
    -4.376143862183997e-06,
    7.2412482876736205e-06,
    -1.0119940100188862e-06,
    -6.847079597000557e-07,
    2.6339242262700013e-07,
    2.0143220235505126e-10,
    -1.814843248299696e-08,
    4.056127055551833e-09,
    -2.9988364896193194e-10,
];

static DB21: [f64; 42] = [
    0.0005488225098526838,
    0.007776639052354784,
    0.049247771538177276,
    0.1813596254403815,
    0.4196879449393628,
    0.6015060949350038,
    0.4445904519276003,
    -0.03572291961725529,
    -0.3356640895305295,
    -0.11239707156845098,
    0.2115645276808724,
    0.1152332984396871,
    -0.1399404249325472,
    -0.08177594298086382,
    0.09660039032372422,
    0.04572340574922879,
    -0.06497750489373232,
    -0.018653859202118515,
    0.039726835427850445,
    0.0033577563903381107,
    -0.02089205367797908,
    0.002403470920805435,
    0.008988824381971912,
    -0.0028913343485889014,
    -0.002958374038932831,
    0.001716607040630624,
    0.0006394185005120303,
    -0.0006906711170821016,
    -3.196406277680437e-05,
    0.00019366465041650805,
    -3.635520250086338e-05,
    -3.4996659849874476e-05,
    1.535482509276049e-05,
    2.790330539814487e-06,
    -3.0900171645456993e-06,
    3.1660954423670305e-07,
    2.9921366304648526e-07,
    -1.0004008790305973e-07,
    -2.2540149746733303e-09,
    7.058033541231122e-09,
    -1.4719541976503653e-09,
    1.0388055710237066e-10,
];

static DB22: [f64; 44] = [
    0.00038626323149109823,
    0.0057218546313345395,
    0.03806993723641108,
    0.14836754089011142,
    0.3677286834460375,
    0.5784327310095244,
    0.5079010906221639,
    0.07372450118363015,
    -0.3127265804282962,
    -0.2005684061048871,
    0.16409318810676649,
    0.1799731879928913,
    -0.09711079840911471,
    -0.1317681376866834,
    0.06807631439273222,
    0.08455737636682607,
    -0.05136425429744413,
    -0.046530811827506714,
    0.03697084662069802,
    0.02058670762756536,
    -0.023480001344493188,
    -0.006213782849364659,
    0.012564725218343373,
    0.0003001373985076436,
    -0.005455691986156717,
    0.0010442607391860253,
    0.0018270104956572791,
    -0.0007706909881231197,
    -0.00042378739983918006,
    0.0003286094142136787,
    4.345899904532003e-05,
    -9.40522363481576e-05,
    1.1374349662125932e-05,
    1.7373756957561893e-05,
    -6.166729316467578e-06,
    -1.5651791319951602e-06,
    1.2951820573188775e-06,
    -8.779879873361287e-08,
    -1.2833362287517545e-07,
    3.7612287493373625e-08,
    1.6801714049229888e-09,
    -2.729623146632976e-09,
    5.33593882166749e-10,
    -3.602113484339555e-11,
];

static DB23: [f64; 46] = [
    0.00027190419412828886,
    0.004202748893183833,
    0.029310003657884116,
    0.12051553178397194,
    0.3184508138528652,
    0.5449311478735205,
    0.5510185172419194,
    0.18139262536384002,
    -0.2613921480306441,
    -0.27140209860784303,
    0.09212540708241805,
    0.22357365824204023,
    -0.03303744709428938,
    -0.16401132153187592,
    0.0202830745756493,
    0.11229704361810729,
    -0.02112621235622724,
    -0.0702073915749011,
    0.021765856834499976,
    0.038495332522569196,
    -0.01852351365015616,
    -0.017537101003035845,
    0.012751943931528287,
    0.006031840650024163,
    -0.007075319273706152,
    -0.0011348654733562516,
    0.003122876449818145,
    -0.0002465014005163512,
    -0.0010612312288866513,
    0.00031942049270990115,
    0.00025676245200787374,
    -0.0001500218503490341,
    -3.378894834120904e-05,
    4.426071203109246e-05,
    -2.6352078892491864e-06,
    -8.347875567854625e-06,
    2.39756954684024e-06,
    8.147574834779447e-07,
    -5.339005405209421e-07,
    1.853091785633965e-08,
    5.4175491795392784e-08,
    -1.3999354954379989e-08,
    -9.472885901812052e-10,
    1.0504464536965433e-09,
    -1.9324051113134174e-10,
    1.250203302351041e-11,
];

static DB24: [f64; 48] = [
    0.00019143580094755136,
    0.0030820817149054946,
    0.02248233994971641,
    0.0972622358336252,
    0.2729089160677263,
    0.504371040839925,
    0.574939221095542,
    0.2809855532337119,
    -0.18727140688515623,
    -0.31794307899936275,
    0.004776613684344728,
    0.23923738878031087,
    0.04252872964148383,
    -0.1711753513703469,
    -0.038777173577920016,
    0.12101630346922423,
    0.020980113709144814,
    -0.08216165420800167,
    -0.004578436241819222,
    0.05130162003998088,
    -0.004944709428125628,
    -0.02821310709490189,
    0.007661721881646586,
    0.013049970871085736,
    -0.006291435370018188,
    -0.004746568786323114,
    0.0037360461782825235,
    0.0011537649368394815,
    -0.0016964568189748244,
    -4.41618485614152e-05,
    0.000586127059318311,
    -0.00011812332379695547,
    -0.0001460079817762617,
    6.559388639305635e-05,
    2.1832414604665582e-05,
    -2.0228882926126976e-05,
    1.3411577508091147e-08,
    3.901100338597703e-06,
    -8.980253143938407e-07,
    -4.032507756879972e-07,
    2.1663396532785745e-07,
    -5.0576454197925e-10,
    -2.2557403881760862e-08,
    5.157776789672e-09,
    4.748375824256231e-10,
    -4.0246586445843797e-10,
    6.99180115763823e-11,
    -4.34278250380371e-12,
];

static DB25: [f64; 50] = [
    0.0001348029793470189,
    0.0022569595918547794,
    0.017186741254040155,
    0.07803586287213267,
    0.23169350788602183,
    0.4596834151460946,
    0.5816368967460578,
    0.3678850748029467,
    -0.09717464096463814,
    -0.3364730796417461,
    -0.08758761458765466,
    0.2245378197451017,
    0.11815528671995985,
    -0.15056021375057962,
    -0.09850861528996022,
    0.10663380501847795,
    0.0667521644940186,
    -0.0770841110565742,
    -0.03717396286112251,
    0.0536179093987795,
    0.015542605929102291,
    -0.03404232046065334,
    -0.0030798367948470366,
    0.018922804476627628,
    -0.0019894257822027366,
    -0.008860702618046369,
    0.0027269362587384956,
    0.003322707773973192,
    -0.0018424842902033313,
    -0.000899977423746295,
    0.0008772581936748275,
    0.00011532124404663005,
    -0.0003098800990984698,
    3.543714523276059e-05,
    7.904640003965528e-05,
    -2.7330481199600417e-05,
    -1.2771952931997837e-05,
    8.990661393062588e-06,
    5.232827708153076e-07,
    -1.7792013326536346e-06,
    3.212037518862519e-07,
    1.9228067901423717e-07,
    -8.656941732278507e-08,
    -2.6115985561117707e-09,
    9.279224480081372e-09,
    -1.8804157550621554e-09,
    -2.228474910228169e-10,
    1.5359015701626572e-10,
    -2.5276251634656447e-11,
    1.5096920828239108e-12,
];

static DB26: [f64; 52] = [
    9.493795750710593e-05,
    0.0016505202335329882,
    0.0130975542925585,
    0.062274744025149605,
    0.1950394387167701,
    0.4132929622783564,
    0.5736690430342223,
    0.43915831178916626,
    0.0017740767809866858,
    -0.32638459369178,
    -0.1748399612893925,
    0.1812918323111227,
    0.18275540958967237,
    -0.10432390028592704,
    -0.1479771932752545,
    0.06982318611329237,
    0.10648240524980863,
    -0.053448561681483195,
    -0.06865475960403591,
    0.042232185796372036,
    0.03853571597111186,
    -0.03137811036306776,
    -0.017760903568358185,
    0.020734920179963826,
    0.005829580555318888,
    -0.01178549790619303,
    -0.0005287383992626815,
    0.005601947239423805,
    -0.000939058250473829,
    -0.002145530281567621,
    0.0008383488056543616,
    0.0006161382204574344,
    -0.00043195570742618077,
    -0.0001060574748283804,
    0.00015747952386074935,
    -5.277795493037869e-06,
    -4.1096739963914775e-05,
    1.074221540872195e-05,
    7.000078682964987e-06,
    -3.887400161856795e-06,
    -4.6504632206402627e-07,
    7.939210633709952e-07,
    -1.0790042375786714e-07,
    -8.90446637016859e-08,
    3.40779562129073e-08,
    2.169328259850323e-09,
    -3.776010478532324e-09,
    6.780047245828637e-10,
    1.0023031910465269e-10,
    -5.840408185341171e-11,
    9.130510016371797e-12,
    -5.251871224244435e-13,
];

static DB27: [f64; 54] = [
    6.687131385431931e-05,
    0.0012055312316732133,
    0.00995258878087662,
    0.04945259998290488,
    0.16292202750239332,
    0.3671102141253898,
    0.5538498609904801,
    0.493406122677999,
    0.10284085506182292,
    -0.2897168033145949,
    -0.24826458190326056,
    0.11482301951778535,
    0.22727328841417083,
    -0.03878641863180231,
    -0.1780317409590086,
    0.015799397460240484,
    0.13119797171715533,
    -0.014062751555808765,
    -0.09102290652956592,
    0.01731101826549371,
    0.05796940573471799,
    -0.018512493561998078,
    -0.03273906663102087,
    0.016146966922395666,
    0.015665595648924578,
    -0.011577186458976282,
    -0.005862096345462926,
    0.0068566356096848805,
    0.0013426268773036795,
    -0.0033328544695200063,
    0.00014575296259317286,
    0.001301177450244135,
    -0.00034183512269154277,
    -0.00038790185741013276,
    0.00020197198796903268,
    7.660058387068577e-05,
    -7.711145517797584e-05,
    -3.5174836149074453e-06,
    2.0634426477368854e-05,
    -3.901164070638425e-06,
    -3.657500908187105e-06,
    1.6343696247256378e-06,
    3.050880686251999e-07,
    -3.4724681473943893e-07,
    3.2865589680551595e-08,
    4.0262550528669086e-08,
    -1.3213322739900565e-08,
    -1.3094656068569551e-09,
    1.5216149847785218e-09,
    -2.415526928011131e-10,
    -4.3749862242936544e-11,
    2.2136620880676626e-11,
    -3.295790122476586e-12,
    1.828188352882425e-13,
];

static DB28: [f64; 56] = [
    4.710807775014051e-05,
    0.000879498515984387,
    0.007542650377646859,
    0.039092608115405346,
    0.13513791425364105,
    0.32256336128552243,
    0.5249982316303355,
    0.5305162934414858,
    0.20017614404598444,
    -0.23049895404758253,
    -0.30132780953264177,
    0.0328578791633871,
    0.24580815137375955,
    0.03690688531571127,
    -0.18287733073298493,
    -0.04683823374455168,
    0.1346275679102261,
    0.0344786312750997,
    -0.09768535580565244,
    -0.0173419228313059,
    0.06774789550190934,
    0.0034480189555409512,
    -0.04333336861608628,
    0.004431732910062988,
    0.024688060010151867,
    -0.006815549764552309,
    -0.01206359196821849,
    0.005838816627748945,
    0.0047848631124542415,
    -0.003725461247074255,
    -0.0013603738456396924,
    0.0018759986682027956,
    0.00014156723931404644,
    -0.000748674955911463,
    0.00011546560636589213,
    0.00022957909822334563,
    -8.903901490044488e-05,
    -4.9077134161902505e-05,
    3.6414012110508025e-05,
    4.638664981394295e-06,
    -1.0043260413334226e-05,
    1.2479003175748342e-06,
    1.8403637345177692e-06,
    -6.670215479954893e-07,
    -1.7574611732098427e-07,
    1.4906600135353622e-07,
    -8.262387315626558e-09,
    -1.78413869087571e-08,
    5.044047056383437e-09,
    6.944540328946227e-10,
    -6.077041247229011e-10,
    8.492220011056382e-11,
    1.8673672637833906e-11,
    -8.3654904712588e-12,
    1.1888505334059015e-12,
    -6.367772354714857e-14,
];

static DB29: [f64; 58] = [
    3.318966279841525e-05,
    0.0006409516803044435,
    0.0057021265177733755,
    0.030773580221408376,
    0.11137011695174052,
    0.28065345597098296,
    0.4897588047621993,
    0.5513744327583752,
    0.2891052383358292,
    -0.15402873445990006,
    -0.33004094891758806,
    -0.055706800072940856,
    0.23610523615302595,
    0.11241917487318838,
    -0.16087798859418773,
    -0.10784594993872142,
    0.11447229589381826,
    0.08322074716244976,
    -0.0851254926156355,
    -0.055027489525325726,
    0.06347916458421186,
    0.030531543272704135,
    -0.04518798127778834,
    -0.012917142554266795,
    0.02947043187174764,
    0.002648327307678168,
    -0.01704122457360669,
    0.001737880332720511,
    0.008469725493560752,
    -0.0025508071277894726,
    -0.0034737989896811007,
    0.0018771209257236502,
    0.001087053942226063,
    -0.0010007783270856805,
    -0.00020007113630767797,
    0.0004111283454742767,
    -2.2920180412145e-05,
    -0.00012930448400807207,
    3.645026068562775e-05,
    2.913344750169041e-05,
    -1.6573283953066164e-05,
    -3.5936448040251875e-06,
    4.7506092464525525e-06,
    -3.029054592052818e-07,
    -8.975701750636281e-07,
    2.633898386997697e-07,
    9.387197411095864e-08,
    -6.286156922010786e-08,
    1.0765919066191961e-09,
    7.768978854770062e-09,
    -1.893995386171984e-09,
    -3.426800863263089e-10,
    2.4070994535093427e-10,
    -2.940589250764533e-11,
    -7.832509733627818e-12,
    3.1527624133703105e-12,
    -4.2856548700683443e-13,
    2.219191311588303e-14,
];

static DB30: [f64; 60] = [
    2.3386161727314215e-05,
    0.0004666379504285509,
    0.004300797165048069,
    0.02413083267158838,
    0.0912383040670157,
    0.2420206709402141,
    0.4504878218533178,
    0.5575722329128364,
    0.36624268337162796,
    -0.06618367077593731,
    -0.3329669750208556,
    -0.14196851333008292,
    0.19946212158066431,
    0.17782987324483673,
    -0.11455821943270778,
    -0.1572368179599938,
    0.07277865897036442,
    0.12274774604500938,
    -0.053806465458257076,
    -0.08765869003638366,
    0.04380166467141773,
    0.0567123657447357,
    -0.03567339749675961,
    -0.03226375891935221,
    0.027078619595294184,
    0.015287960769857396,
    -0.01839974386811734,
    -0.005296859666131087,
    0.01091563165830489,
    0.0006196717564977244,
    -0.005530730148192003,
    0.0008433845866620934,
    0.002324520094060099,
    -0.0008609276968110424,
    -0.0007678782504380919,
    0.0005050948239033468,
    0.00017248258423517096,
    -0.00021617183011696337,
    -8.54830546758407e-06,
    6.982008370808328e-05,
    -1.3397168632939717e-05,
    -1.6361524787254266e-05,
    7.252145535890469e-06,
    2.3275490984936866e-06,
    -2.1872676769961665e-06,
    1.0994743385262033e-08,
    4.2616623260115723e-07,
    -1.0004146823545009e-07,
    -4.7643799651394533e-08,
    2.6054427549776254e-08,
    5.553397861397054e-10,
    -3.331105680467578e-09,
    6.984862691832183e-10,
    1.6136229782709042e-10,
    -9.461387997276803e-11,
    1.0001051313931712e-11,
    3.239428638532286e-12,
    -1.1852375921015822e-12,
    1.54399757084762e-13,
    -7.737942630954405e-15,
];

static DB31: [f64; 62] = [
    1.648013386456141e-05,
    0.0003394122037769957,
    0.0032368840686277213,
    0.018853691612985914,
    0.07433609301164788,
    0.20701287448523534,
    0.40919220003742784,
    0.5511398409142755,
    0.4294688082061373,
    0.027169212497369463,
    -0.3109551183195075,
    -0.21797848552356336,
    0.14017828876527327,
    0.2249667114737371,
    -0.04992634916046824,
    -0.18696236089571544,
    0.015436988429488934,
    0.1450895009319932,
    -0.008139832273469236,
    -0.10761277332349563,
    0.01094129745236497,
    0.07535361174328141,
    -0.014880026618104822,
    -0.04861907546485433,
    0.016154171565985913,
    0.02804761936675617,
    -0.01427627527776352,
    -0.01390055293926653,
    0.010517639487371841,
    0.005516163573310993,
    -0.006520852375874612,
    -0.00142826422321891,
    0.0033930667767159317,
    -6.397901106014601e-05,
    -0.001459041741985161,
    0.00034313982969047345,
    0.0004998816175637223,
    -0.00023965834694029495,
    -0.00012434116172502287,
    0.00010895843504167668,
    1.501335727444533e-05,
    -3.631255157860086e-05,
    4.034520235184279e-06,
    8.795301342692988e-06,
    -3.0351423658915096e-06,
    -1.3690602309429407e-06,
    9.810015422044372e-07,
    5.327250656974915e-08,
    -1.9759251291702062e-07,
    3.6168265173310047e-08,
    2.3283097138214097e-08,
    -1.0615296021502523e-08,
    -6.474311687959861e-10,
    1.4085681510251775e-09,
    -2.524043954153353e-10,
    -7.348930032486264e-11,
    3.6921088088711296e-11,
    -3.32700896712598e-12,
    -1.324334917243963e-12,
    4.4454670962919323e-13,
    -5.5594420505790146e-14,
    2.6993828797626656e-15,
];

static DB32: [f64; 64] = [
    1.1614633021350149e-05,
    0.00024665669063809033,
    0.002431261919572266,
    0.014681046381419136,
    0.06025749912033537,
    0.1757507836394389,
    0.36750962859734965,
    0.5343179193409539,
    0.4778091637339484,
    0.12063053826561783,
    -0.26669818147667557,
    -0.2774215815584272,
    0.06471335480551624,
    0.24831064235688016,
    0.024662444839697404,
    -0.1921023447085469,
    -0.04899511718467174,
    0.14523207947528666,
    0.04440490819993974,
    -0.10945611311608938,
    -0.029627872508447704,
    0.08087414063848396,
    0.014106151516106608,
    -0.05692631406247844,
    -0.0023802644649325738,
    0.03705145792354468,
    -0.004145907660827218,
    -0.021662822836391194,
    0.006167527310685675,
    0.011017400715406881,
    -0.005411568257275791,
    -0.004649216751184412,
    0.003627224640687865,
    0.0014689551004684678,
    -0.0019647405558217783,
    -0.0002211678729579098,
    0.0008673058518450555,
    -0.00010245373106073962,
    -0.0003059654423826912,
    0.00010539154617398281,
    8.103678329134838e-05,
    -5.259809282684323e-05,
    -1.2940457794055127e-05,
    1.8242684019806914e-05,
    -6.361781532260255e-07,
    -4.558309576264423e-06,
    1.202889036321621e-06,
    7.560047625595948e-07,
    -4.285970693151457e-07,
    -5.00336186874823e-08,
    8.965966311957729e-08,
    -1.2199243594833731e-08,
    -1.104383021722649e-08,
    4.250422311980593e-09,
    4.3843877999404743e-10,
    -5.881091462634606e-10,
    8.904723796221606e-11,
    3.263270741332908e-11,
    -1.4309187651692024e-11,
    1.0756106535010622e-12,
    5.361482229611802e-13,
    -1.6638004894334023e-13,
    2.000715303810525e-14,
    -9.421019139535079e-16,
];

static DB33: [f64; 66] = [
    8.186358314175091e-06,
    0.00017910161537027915,
    0.0018227094351640843,
    0.01139594337458161,
    0.04861466653171619,
    0.14818631318005282,
    0.32671813011770756,
    0.5093761725149396,
    0.5112547705832675,
    0.20958235071305542,
    -0.20420262239854212,
    -0.31599741076656024,
    -0.01927833943695276,
    0.24542061211927912,
    0.09985155868033815,
    -0.17142809905185932,
    -0.11084413311671079,
    0.12196785640373461,
    0.09478808805061596,
    -0.09114696835133149,
    -0.07030248505405616,
    0.07019114394099653,
    0.04573456189389668,
    -0.05347125133582229,
    -0.025248582977476498,
    0.038687060760244966,
    0.010703265820019549,
    -0.025728761754732973,
    -0.002167758617353607,
    0.015316954115857666,
    -0.0015942887824146048,
    -0.00795354038705794,
    0.0023890624081659086,
    0.003480800953405712,
    -0.001860718214455796,
    -0.001204309257604659,
    0.0010743806963512913,
    0.0002727305847336937,
    -0.0004908329007590351,
    4.3931662517661856e-06,
    0.00017804318982512455,
    -4.1604385162737096e-05,
    -4.9295644234173015e-05,
    2.4233353988168903e-05,
    9.070805757828453e-06,
    -8.866121366757737e-06,
    -3.607516102879772e-07,
    2.2883712761415273e-06,
    -4.4269234079528704e-07,
    -3.985791291985944e-07,
    1.8224433325710535e-07,
    3.377972703730854e-08,
    -3.9878381985188806e-08,
    3.6728635768381814e-09,
    5.111211857347454e-09,
    -1.6713926772519324e-09,
    -2.496402105246194e-10,
    2.426833102305682e-10,
    -3.0495744539458635e-11,
    -1.4202368598899367e-11,
    5.509414720765525e-12,
    -3.343481218953279e-13,
    -2.1524883868333026e-13,
    6.214740247174398e-14,
    -7.196510545363322e-15,
    3.289373678416306e-16,
];

static DB34: [f64; 68] = [
    5.770510632730285e-06,
    0.000129947620067953,
    0.00136406139005905,
    0.008819889403884978,
    0.03904884135178594,
    0.1241524821113768,
    0.28776505923371454,
    0.47847874627937104,
    0.5305550996564632,
    0.290366329507275,
    -0.12824684217443716,
    -0.33152530150838694,
    -0.10389191551564048,
    0.21690722018742759,
    0.16660175041220746,
    -0.12733735822380116,
    -0.1609249271778668,
    0.07799184693794811,
    0.13412596027113613,
    -0.05448296806413905,
    -0.10294759699281408,
    0.043576094649631296,
    0.0731852354367956,
    -0.03701283841786245,
    -0.04743855964527776,
    0.030739746573959344,
    0.027228350756354196,
    -0.023671737922826366,
    -0.013143980016657161,
    0.01640937419986519,
    0.00471364926099981,
    -0.01004550670836152,
    -0.0006194748845153873,
    0.005334950768759936,
    -0.0007692127975067837,
    -0.002399453943537056,
    0.0008589959874363662,
    0.0008751999064078689,
    -0.0005527355762144198,
    -0.00023267321402335316,
    0.00026507723975580577,
    2.660050018453442e-05,
    -9.914697770780135e-05,
    1.3531172272496496e-05,
    2.8449514196978075e-05,
    -1.0576574942579506e-05,
    -5.710826510998304e-06,
    4.169871758547028e-06,
    4.979718101421308e-07,
    -1.1163065348170084e-06,
    1.448195708333185e-07,
    2.0259906666678593e-07,
    -7.52670174041259e-08,
    -1.990346501531737e-08,
    1.740423332936068e-08,
    -8.665744261368722e-10,
    -2.316501946995483e-09,
    6.446378210323402e-10,
    1.3004103186094153e-10,
    -9.90477453763241e-11,
    1.0042087354617698e-11,
    6.0801253540001675e-12,
    -2.1078791089153017e-12,
    9.799451158211598e-14,
    8.579194051799733e-14,
    -2.3170837039064084e-14,
    2.5873383819356996e-15,
    -1.14894475448059e-16,
];

static DB35: [f64; 70] = [
    4.067934061148559e-06,
    9.42146947557674e-05,
    0.0010191226803750982,
    0.006807292884319132,
    0.031236288511490715,
    0.10340445586147838,
    0.2513073789944933,
    0.4435927392240354,
    0.5370084275091661,
    0.36034564051804735,
    -0.04388388187393404,
    -0.32382286491211615,
    -0.18178697676672784,
    0.16604135749078092,
    0.2172992893210893,
    -0.06526287131067754,
    -0.19191958929859396,
    0.01930954466601835,
    0.1552924803962371,
    -0.004752680834111351,
    -0.12058552264339356,
    0.004734229172641949,
    0.08991354757072954,
    -0.009318558949903924,
    -0.06335603744044346,
    0.013228549585036555,
    0.04125469306470509,
    -0.014366839784220072,
    -0.024169497801660268,
    0.012766456715656745,
    0.012289436008118711,
    -0.00957779789923571,
    -0.00508599164923343,
    0.006137754586740521,
    0.0014280887940707622,
    -0.0033576443809223834,
    7.615969435172737e-06,
    0.001549637469702363,
    -0.0003346692164250855,
    -0.0005864810318991818,
    0.0002648328819961289,
    0.0001700012283661249,
    -0.00013658830722611617,
    -2.9769959628485097e-05,
    5.30414312291331e-05,
    -2.43700152682779e-06,
    -1.5724420772702817e-05,
    4.308047861716731e-06,
    3.35334586287131e-06,
    -1.8959296176931532e-06,
    -3.9039317332873064e-07,
    5.302368616904761e-07,
    -3.700308378205125e-08,
    -9.990396944534901e-08,
    3.008188650719067e-08,
    1.0849027337899348e-08,
    -7.458116552893037e-09,
    5.897951310384362e-11,
    1.0308233454854333e-09,
    -2.433545573751673e-10,
    -6.407938256501889e-11,
    4.0005366272537445e-11,
    -3.1256393571085576e-12,
    -2.5670654761550815e-12,
    8.015088533687901e-13,
    -2.5979543288938482e-14,
    -3.3977208567962675e-14,
    8.624037434720089e-15,
    -9.298012529324185e-16,
    4.0146287123334886e-17,
];

static DB36: [f64; 72] = [
    2.867925182755946e-06,
    6.826028678546358e-05,
    0.0007602151099668488,
    0.005240297377409884,
    0.024890565644827965,
    0.08565209259526409,
    0.2177569530979008,
    0.4064336977082553,
    0.5322668952607287,
    0.4178753356009698,
    0.04397519752934863,
    -0.2944210395891146,
    -0.24680703697812553,
    0.09811420416311477,
    0.2465372776089742,
    0.007278515095792229,
    -0.19933720560864962,
    -0.045861400746392715,
    0.1541062366276429,
    0.05027618007353843,
    -0.11880375431013564,
    -0.03988085357551317,
    0.09115678225801654,
    0.02503872144956849,
    -0.06820901663681751,
    -0.011319100316817429,
    0.04851308354780909,
    0.0014249726617653917,
    -0.0319807206776397,
    0.003984040198717005,
    0.01906359478062536,
    -0.005657813245058818,
    -0.009990263473281372,
    0.005022989106665829,
    0.004413484835350576,
    -0.0034845414454048834,
    -0.0015030740662966438,
    0.0019907937718517373,
    0.0002776812795712026,
    -0.0009463403823261102,
    8.614565758992702e-05,
    0.00036935072849675105,
    -0.00011551188958435271,
    -0.00011318994680846657,
    6.69474119693059e-05,
    2.3751066836608608e-05,
    -2.7313908246543378e-05,
    -1.183471059985616e-06,
    8.372218198160788e-06,
    -1.5861457824345775e-06,
    -1.8708116028591808e-06,
    8.311421279707779e-07,
    2.5484235225565776e-07,
    -2.4553776584342327e-07,
    2.753249073339512e-09,
    4.799043465450992e-08,
    -1.1560936888170085e-08,
    -5.612784343327791e-09,
    3.138841695782424e-09,
    1.0908155537137518e-10,
    -4.5125457785632494e-10,
    8.962418203859612e-11,
    3.037429098112535e-11,
    -1.599716689261357e-11,
    8.876846287217375e-13,
    1.070969357114017e-12,
    -3.029285026974877e-13,
    5.542263182639804e-15,
    1.3380713862991059e-14,
    -3.2046285434017497e-15,
    3.339971984818693e-16,
    -1.4032741753731907e-17,
];

static DB37: [f64; 74] = [
    2.0220608624983923e-06,
    4.942343750628132e-05,
    0.0005662418377066724,
    0.0040241403682572865,
    0.01976228615387959,
    0.0705848259771816,
    0.18732633186206493,
    0.36844097240030615,
    0.5181670408556229,
    0.4622075536616057,
    0.13087896323302017,
    -0.24618042976108342,
    -0.29437591526266177,
    0.01967150045235939,
    0.2515232543602687,
    0.08180602838721862,
    -0.181962291778608,
    -0.10845171382330178,
    0.12992964695985376,
    0.10178029683881418,
    -0.09660754061668439,
    -0.08233021190655741,
    0.07504761994836018,
    0.059567410871529954,
    -0.05925681563265897,
    -0.03825382947938425,
    0.045807944151268334,
    0.020972800592597547,
    -0.03352358406410097,
    -0.008833493890410233,
    0.022618651544599473,
    0.0016904723834844238,
    -0.013763981962894785,
    0.0015193057788333991,
    0.007387757452855584,
    -0.0022480531870038246,
    -0.0033945232764083988,
    0.0018168713438014236,
    0.0012639342581174772,
    -0.0011114848653186302,
    -0.00032807884708801983,
    0.0005490532773373631,
    1.5344390231955034e-05,
    -0.00022089440324554938,
    4.336726125945695e-05,
    7.055138782065466e-05,
    -3.09866292761993e-05,
    -1.6391624961605832e-05,
    1.3543277184167817e-05,
    1.8499450031155903e-06,
    -4.3099415565970926e-06,
    4.854731396996412e-07,
    1.0021213992971776e-06,
    -3.494948603445728e-07,
    -1.5098853886715837e-07,
    1.1090312322164394e-07,
    5.3506575154614344e-09,
    -2.2521938367248057e-08,
    4.224485706362419e-09,
    2.793974465953983e-09,
    -1.297205001469435e-09,
    -1.031411129096975e-10,
    1.946164894082315e-10,
    -3.203398244123242e-11,
    -1.3984157155376414e-11,
    6.3349554409739135e-12,
    -2.0963631942348006e-13,
    -4.4216124098721056e-13,
    1.1380528309214397e-13,
    -4.518889607463727e-16,
    -5.243025691884206e-15,
    1.1890123875082528e-15,
    -1.1992803358528796e-16,
    4.9066150649352034e-18,
];

static DB38: [f64; 76] = [
    1.4257766416741318e-06,
    3.576251994264023e-05,
    0.00042117026647271163,
    0.0030830881192537517,
    0.015637249347572157,
    0.057889943612859256,
    0.1600719935641107,
    0.33077578141101466,
    0.4965911753117181,
    0.4933560785171008,
    0.2130505713555785,
    -0.1828676677083359,
    -0.3216756378089979,
    -0.06226650604782432,
    0.2321259638353531,
    0.14998511961871702,
    -0.1417956859730596,
    -0.15991256515824437,
    0.08563812155615105,
    0.14141473407338268,
    -0.05658645863072738,
    -0.11473117071074437,
    0.04309589543304764,
    0.08720439826203975,
    -0.036605103402874296,
    -0.06176620870841316,
    0.03198987753153781,
    0.04005498110511595,
    -0.026891493880894516,
    -0.023114134020549317,
    0.020904645255655243,
    0.011290497278685965,
    -0.014701882065398682,
    -0.004131306656031089,
    0.00921478503219718,
    0.0005625715748403532,
    -0.005071314509218348,
    0.0007169821821064019,
    0.0024006977818909732,
    -0.0008448626665537775,
    -0.0009424614077227377,
    0.0005810759750532864,
    0.00028176392503806707,
    -0.0003031020460726612,
    -4.55568269666842e-05,
    0.00012620433501661708,
    -1.1554091038337172e-05,
    -4.175141648540398e-05,
    1.3341761499213504e-05,
    1.0373591840455998e-05,
    -6.456730428469619e-06,
    -1.5508443501186026e-06,
    2.1499602699396653e-06,
    -8.487087586072593e-08,
    -5.187733738874145e-07,
    1.3963775455083553e-07,
    8.400351046895966e-08,
    -4.8847579374592866e-08,
    -5.424274800287298e-09,
    1.0347045392748585e-08,
    -1.4363294877951358e-09,
    -1.3491977539834489e-09,
    5.261132557357599e-10,
    6.732336490189309e-11,
    -8.278256522538134e-11,
    1.1016929345994545e-11,
    6.291537317039508e-12,
    -2.4847892375636427e-12,
    2.626496504065252e-14,
    1.8086612362745306e-13,
    -4.249817819571463e-14,
    -4.563397162127374e-16,
    2.0450996767889887e-15,
    -4.405307042483461e-16,
    4.3045968395587903e-17,
    -1.7161524510887442e-18,
];

static DAUBECHIES: [&[f64]; 38] = [
    &DB1,
    &DB2,
    &DB3,
    &DB4,
    &DB5,
    &DB6,
    &DB7,
    &DB8,
    &DB9,
    &DB10,
    &DB11,
    &DB12,
    &DB13,
    &DB14,
    &DB15,
    &DB16,
    &DB17,
    &DB18,
    &DB19,
    &DB20,
    &DB21,
    &DB22,
    &DB23,
    &DB24,
    &DB25,
    &DB26,
    &DB27,
    &DB28,
    &DB29,
    &DB30,
    &DB31,
    &DB32,
    &DB33,
    &DB34,
    &DB35,
    &DB36,
    &DB37,
    &DB38,
];

/// Tabulated Daubechies filter of the given order, if any
pub fn daubechies_table(order: usize) -> Option<&'static [f64]> {
    order.checked_sub(1).and_then(|i| DAUBECHIES.get(i)).copied()
}
